// DIGEST FORMATTING
// ================================================================================================

/// Renders `values` as lowercase hex, most significant byte (the last one) first, with a single
/// space in front of every byte: [0x01, 0xab] becomes " ab 01".
pub fn to_hex_string(values: &[u8]) -> String {
    let reversed: Vec<u8> = values.iter().rev().cloned().collect();
    let digits = hex::encode(&reversed);

    let mut output = String::with_capacity(values.len() * 3);
    for pair in digits.as_bytes().chunks(2) {
        output.push(' ');
        output.push(pair[0] as char);
        output.push(pair[1] as char);
    }
    return output;
}

/// Renders `values` as binary, most significant byte first and most significant bit of every
/// byte first. Each byte is preceded by a space, and a line break is inserted in front of every
/// byte whose index is 7 modulo 8, so full 8-byte rows end up on separate lines.
pub fn to_binary_string(values: &[u8]) -> String {
    let mut output = String::with_capacity(values.len() * 10);
    for (position, value) in values.iter().enumerate().rev() {
        if position % 8 == 7 {
            output.push('\n');
        }
        output.push(' ');
        output.push_str(&format!("{:08b}", value));
    }
    return output;
}
