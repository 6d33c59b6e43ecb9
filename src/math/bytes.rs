use num_bigint::BigUint;

// BYTE COUNTER
// ================================================================================================

/// Adds one to `values` interpreted as a little-endian unsigned integer (byte 0 is the least
/// significant byte). Carries propagate toward the end of the slice; when every byte is 0xFF
/// the value wraps around to all zeros. Returns true if the value wrapped.
pub fn increment(values: &mut [u8]) -> bool {
    for value in values.iter_mut() {
        if *value < 0xFF {
            *value += 1;
            return false;
        }
        *value = 0;
    }
    return true;
}

/// Returns the number of increments after which a buffer of `length` bytes repeats its value,
/// i.e. 256^length.
pub fn wrap_period(length: usize) -> BigUint {
    return BigUint::from(1u32) << (8 * length);
}

// ZERO BIT COUNTER
// ================================================================================================

/// Counts zero bits starting from bit 0 of byte 0 and moving toward the most significant bit
/// of the last byte; stops at the first 1 bit. An all-zero input yields 8 * values.len().
pub fn count_leading_zero_bits(values: &[u8]) -> u32 {
    let mut zeros = 0;
    for &value in values {
        if value != 0 {
            return zeros + value.trailing_zeros();
        }
        zeros += 8;
    }
    return zeros;
}
