use num_bigint::BigUint;
use crate::{
    crypto::{ DigestFunction, Hasher, HashAlgorithm },
    search, Buffer, InputEncoding, SearchEngine, SearchOptions,
};


static EMPTY_SHA256: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

#[test]
fn empty_input_zero_threshold() {
    let result = search(Buffer::new(vec![]), &SearchOptions::default()).unwrap();

    assert_eq!(BigUint::from(0u32), *result.steps());
    assert_eq!(EMPTY_SHA256, hex::encode(result.digest().as_bytes()));
    assert!(result.input().is_empty());
}

#[test]
fn empty_input_hex_rendering() {
    let digest = Hasher::new(HashAlgorithm::Sha256).digest(b"");
    assert_eq!(
        " 55 b8 52 78 1b 99 95 a4 4c 93 9b 64 e4 41 ae 27 24 b9 6f 99 c8 f4 fb 9a 14 1c fc 98 42 c4 b0 e3",
        digest.to_hex_string());
}

#[test]
fn empty_input_binary_rendering() {
    let digest = Hasher::new(HashAlgorithm::Sha256).digest(b"");
    let expected = concat!(
        "\n 01010101 10111000 01010010 01111000 00011011 10011001 10010101 10100100",
        "\n 01001100 10010011 10011011 01100100 11100100 01000001 10101110 00100111",
        "\n 00100100 10111001 01101111 10011001 11001000 11110100 11111011 10011010",
        "\n 00010100 00011100 11111100 10011000 01000010 11000100 10110000 11100011");
    assert_eq!(expected, digest.to_binary_string());
}

#[test]
fn search_sha256() {
    let initial = Buffer::from_text("All you need is love", InputEncoding::Utf8).unwrap();

    let result = search(initial.clone(), &SearchOptions::new(8, HashAlgorithm::Sha256)).unwrap();
    assert_eq!(BigUint::from(221u32), *result.steps());
    assert_eq!(b"\x1eml you need is love", result.input().as_bytes());
    assert_eq!(
        "00c2d848da237c4f3dd4bc801251326755609dfc9b848d403e1bcea8acb45265",
        hex::encode(result.digest().as_bytes()));
    assert_eq!(9, result.zero_bits());

    let result = search(initial, &SearchOptions::new(12, HashAlgorithm::Sha256)).unwrap();
    assert_eq!(BigUint::from(3051u32), *result.steps());
    assert_eq!(b",xl you need is love", result.input().as_bytes());
    assert_eq!(14, result.zero_bits());
}

#[test]
fn search_sha3() {
    let initial = Buffer::from_text("hello", InputEncoding::Utf8).unwrap();
    let result = search(initial, &SearchOptions::new(10, HashAlgorithm::Sha3_256)).unwrap();
    assert_eq!(BigUint::from(471u32), *result.steps());
    assert_eq!(
        "0064cc34d693b91842b4e1c1a26c376c012daff963132ba30fc7865e3e80b33c",
        hex::encode(result.digest().as_bytes()));
}

#[test]
fn search_blake3() {
    let initial = Buffer::from_text("hello", InputEncoding::Utf8).unwrap();
    let result = search(initial.clone(), &SearchOptions::new(10, HashAlgorithm::Blake3)).unwrap();
    assert!(result.zero_bits() >= 10);

    // the accepted input is reproducible and its digest is the reported one
    let hasher = Hasher::new(HashAlgorithm::Blake3);
    assert_eq!(*result.digest(), hasher.digest(result.input().as_bytes()));

    let mut engine = SearchEngine::new(hasher, initial, 10);
    assert_eq!(result, engine.run());
}

#[test]
fn search_resumes_after_solution() {
    let options = SearchOptions::new(8, HashAlgorithm::Sha256);
    let first = search(Buffer::from_text("All you need is love", InputEncoding::Utf8).unwrap(), &options).unwrap();

    let mut next = first.input().clone();
    next.increment();
    let second = search(next, &options).unwrap();

    assert!(second.zero_bits() >= 8);
    assert_ne!(first.input(), second.input());
}

#[test]
fn halt_on_wrap() {
    // sha256 of a 1-byte input never has 64 leading zero bits
    let options = SearchOptions::new(64, HashAlgorithm::Sha256).with_halt_on_wrap(true);
    assert_eq!(None, search(Buffer::new(vec![0x00]), &options));

    // but it finds solutions that exist
    let options = SearchOptions::new(1, HashAlgorithm::Sha256).with_halt_on_wrap(true);
    let result = search(Buffer::new(vec![0x00]), &options).unwrap();
    assert!(result.zero_bits() >= 1);
    assert!(*result.steps() < BigUint::from(256u32));
}
