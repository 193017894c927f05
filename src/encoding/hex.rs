use crate::encoding::DecodingError;
use crate::util::try_cast_as_arrays;

/// Decode a hex digest as printed by `sha224sum`, e.g. the argument to `--check`.
///
/// Upper and lower case digits are both accepted, an odd number of digits is a
/// [`DecodingError::CastError`].
/// ```
/// use rusty_sha224::encoding::parse_hex;
/// assert_eq!(parse_hex("d14a").unwrap(), &[0xd1, 0x4a]);
/// assert_eq!(parse_hex("0aFF").unwrap(), &[0x0a, 0xff]);
/// ```
pub fn parse_hex(input: &str) -> Result<Vec<u8>, DecodingError> {
    try_cast_as_arrays(input.as_bytes())?
        .iter()
        .map(|&[h, l]| Ok(h2b(h)? << 4 | h2b(l)?))
        .collect()
}

/// Render digest bytes the way `sha224sum` prints them.
///
/// Every byte is exactly two lowercase digits, so bytes below 0x10 keep their
/// leading zero and a 28 byte digest is always 56 characters.
/// ```
/// use rusty_sha224::encoding::{Encodable, to_hex};
/// assert_eq!(to_hex([0x23, 0x09, 0x7d, 0x22]), "23097d22");
/// assert_eq!([0x0a, 0x00, 0xff][..].encode_hex(), "0a00ff");
/// ```
pub fn to_hex(input: impl AsRef<[u8]>) -> String {
    let bytes = input.as_ref();
    let mut out = String::with_capacity(bytes.len() * 2);
    out.extend(bytes.iter().copied().flat_map(b2h).map(char::from));
    out
}

/// Convert a hex character to the value of the nibble it encodes
fn h2b(b: u8) -> Result<u8, DecodingError> {
    match b {
        b'0'..=b'9' => Ok(b - b'0'),
        b'A'..=b'F' => Ok(b - b'A' + 10),
        b'a'..=b'f' => Ok(b - b'a' + 10),
        x => Err(DecodingError::InvalidCharacter(x)),
    }
}

/// The high and low nibble of a byte as ASCII hex digits
fn b2h(h: u8) -> [u8; 2] {
    #[rustfmt::skip]
    const TABLE: [u8; 16] = [
        b'0', b'1', b'2', b'3',
        b'4', b'5', b'6', b'7',
        b'8', b'9', b'a', b'b',
        b'c', b'd', b'e', b'f',
    ];

    let hi = TABLE[(h >> 4) as usize];
    let lo = TABLE[(h & 0b1111) as usize];
    [hi, lo]
}
