use std::ffi::OsString;
use std::io::{ self, BufRead, Write };
use crate::{ crypto::HashAlgorithm, search, Buffer, InputEncoding, SearchError, SearchOptions, SearchResult };

// TYPES AND INTERFACES
// ================================================================================================

/// What the user has already supplied up front; anything missing is prompted for.
#[derive(Clone, Debug, Default)]
pub struct Request {
    pub text        : Option<String>,
    pub zero_bits   : Option<u32>,
    pub encoding    : InputEncoding,
    pub algorithm   : HashAlgorithm,
    pub halt_on_wrap: bool,
}

// INTERACTIVE SEARCH
// ================================================================================================

/// Asks for the text to hash and the number of zero bits to search for, runs the search, and
/// prints the accepted digest in hex and binary along with the number of increments needed.
///
/// Returns `None` only if `halt_on_wrap` was requested and no solution exists.
pub fn run<R, W>(input: &mut R, output: &mut W, request: &Request) -> Result<Option<SearchResult>, SearchError>
where
    R: BufRead,
    W: Write,
{
    let buffer = match &request.text {
        Some(text) => Buffer::from_text(text, request.encoding)?,
        None => {
            writeln!(output, "Enter the text to hash")?;
            output.flush()?;
            let line = read_line(input)?;
            match request.encoding {
                InputEncoding::Utf8 => Buffer::from_utf8(line)?,
                InputEncoding::Hex  => Buffer::from_text(&decode_line(line)?, InputEncoding::Hex)?,
            }
        }
    };

    let zero_bits = match request.zero_bits {
        Some(zero_bits) => zero_bits,
        None => {
            writeln!(output, "How many zero bits do you want to search for?")?;
            output.flush()?;
            parse_zero_bits(&decode_line(read_line(input)?)?)?
        }
    };

    writeln!(output, "Searching...")?;
    output.flush()?;

    let options = SearchOptions::new(zero_bits, request.algorithm).with_halt_on_wrap(request.halt_on_wrap);
    let result = search(buffer, &options);

    match &result {
        Some(result) => {
            writeln!(output, "Found solution:\n{}", result.digest().to_hex_string())?;
            writeln!(output, "Binary representation:{}", result.digest().to_binary_string())?;
            writeln!(output, "Increment was: {}", result.steps())?;
        },
        None => {
            writeln!(output, "No solution found before the input wrapped around")?;
        }
    }

    return Ok(result);
}

/// Converts text passed on the command line into a `String`, reporting text which is not valid
/// UTF-8 the same way as invalid console input.
pub fn decode_argument(text: OsString) -> Result<String, SearchError> {
    return text.into_string().map_err(|text| SearchError::InvalidEncoding {
        encoding: InputEncoding::Utf8.name(),
        reason  : format!("argument {:?} contains invalid bytes", text),
    });
}

// HELPER FUNCTIONS
// ================================================================================================

/// Reads one line of raw bytes without the line terminator.
fn read_line<R: BufRead>(input: &mut R) -> Result<Vec<u8>, SearchError> {
    let mut line = Vec::new();
    if input.read_until(b'\n', &mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "console input closed").into());
    }

    if line.last() == Some(&b'\n') {
        line.pop();
        if line.last() == Some(&b'\r') {
            line.pop();
        }
    }
    return Ok(line);
}

fn decode_line(line: Vec<u8>) -> Result<String, SearchError> {
    return String::from_utf8(line).map_err(|err| SearchError::InvalidEncoding {
        encoding: InputEncoding::Utf8.name(),
        reason  : err.to_string(),
    });
}

fn parse_zero_bits(text: &str) -> Result<u32, SearchError> {
    let text = text.trim();
    return text.parse::<u32>().map_err(|_| SearchError::InvalidThreshold(text.to_string()));
}

// TESTS
// ================================================================================================
#[cfg(test)]
mod tests {

    use std::io::Cursor;
    use num_bigint::BigUint;
    use std::ffi::OsString;
    use super::{ run, decode_argument, Request };
    use crate::{ crypto::HashAlgorithm, InputEncoding, SearchError };

    const EMPTY_HEX: &str =
        " 55 b8 52 78 1b 99 95 a4 4c 93 9b 64 e4 41 ae 27 24 b9 6f 99 c8 f4 fb 9a 14 1c fc 98 42 c4 b0 e3";

    #[test]
    fn prompts_and_prints_solution() {
        let mut input = Cursor::new(b"\n0\n".to_vec());
        let mut output = Vec::new();
        let result = run(&mut input, &mut output, &Request::default()).unwrap().unwrap();
        assert_eq!(BigUint::from(0u32), *result.steps());

        let output = String::from_utf8(output).unwrap();
        let expected = format!(
            "Enter the text to hash\n\
             How many zero bits do you want to search for?\n\
             Searching...\n\
             Found solution:\n{}\n\
             Binary representation:{}\n\
             Increment was: 0\n",
            EMPTY_HEX, result.digest().to_binary_string());
        assert_eq!(expected, output);
    }

    #[test]
    fn prompts_only_for_missing_values() {
        let mut input = Cursor::new(b"10\r\n".to_vec());
        let mut output = Vec::new();
        let request = Request { text: Some(String::from("hello")), ..Request::default() };
        let result = run(&mut input, &mut output, &request).unwrap().unwrap();

        assert_eq!(BigUint::from(463u32), *result.steps());
        assert_eq!(b"7gllo", result.input().as_bytes());

        let output = String::from_utf8(output).unwrap();
        assert!(!output.contains("Enter the text to hash"));
        assert!(output.starts_with("How many zero bits do you want to search for?\nSearching...\n"));
        assert!(output.ends_with("Increment was: 463\n"));
    }

    #[test]
    fn no_prompts_when_everything_supplied() {
        let mut input = Cursor::new(Vec::new());
        let mut output = Vec::new();
        let request = Request {
            text        : Some(String::from("68656c6c6f")),
            zero_bits   : Some(10),
            encoding    : InputEncoding::Hex,
            algorithm   : HashAlgorithm::Sha3_256,
            halt_on_wrap: false,
        };
        let result = run(&mut input, &mut output, &request).unwrap().unwrap();
        assert_eq!(BigUint::from(471u32), *result.steps());
        assert_eq!(b"?gllo", result.input().as_bytes());
        assert!(String::from_utf8(output).unwrap().starts_with("Searching...\n"));
    }

    #[test]
    fn halt_on_wrap_reports_missing_solution() {
        // a 1-byte input has 256 candidates; none of them can have 200 zero bits
        let mut input = Cursor::new(b"ff\n200\n".to_vec());
        let mut output = Vec::new();
        let request = Request { encoding: InputEncoding::Hex, halt_on_wrap: true, ..Request::default() };
        assert_eq!(None, run(&mut input, &mut output, &request).unwrap());

        let output = String::from_utf8(output).unwrap();
        assert!(output.ends_with("No solution found before the input wrapped around\n"));
    }

    #[test]
    fn invalid_text() {
        let mut input = Cursor::new(vec![0x66, 0xff, b'\n', b'1', b'\n']);
        let mut output = Vec::new();
        match run(&mut input, &mut output, &Request::default()) {
            Err(SearchError::InvalidEncoding { encoding, .. }) => assert_eq!("UTF-8", encoding),
            other => panic!("expected encoding error, got {:?}", other),
        }
    }

    #[test]
    fn invalid_zero_bits() {
        for bad in [&b"abc\n-1\n"[..], &b"abc\nmany\n"[..]].iter() {
            let mut input = Cursor::new(bad.to_vec());
            let mut output = Vec::new();
            match run(&mut input, &mut output, &Request::default()) {
                Err(SearchError::InvalidThreshold(_)) => (),
                other => panic!("expected threshold error, got {:?}", other),
            }
        }
    }

    #[test]
    fn closed_input() {
        let mut input = Cursor::new(b"abc\n".to_vec());
        let mut output = Vec::new();
        match run(&mut input, &mut output, &Request::default()) {
            Err(SearchError::Io(err)) => assert_eq!(std::io::ErrorKind::UnexpectedEof, err.kind()),
            other => panic!("expected i/o error, got {:?}", other),
        }
    }

    #[test]
    fn argument_text() {
        assert_eq!("hello", decode_argument(OsString::from("hello")).unwrap());
    }

    #[cfg(unix)]
    #[test]
    fn invalid_argument_text() {
        use std::os::unix::ffi::OsStringExt;

        let text = OsString::from_vec(vec![0x66, 0xff, 0xfe]);
        match decode_argument(text) {
            Err(SearchError::InvalidEncoding { encoding, .. }) => assert_eq!("UTF-8", encoding),
            other => panic!("expected encoding error, got {:?}", other),
        }
    }
}
