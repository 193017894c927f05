//! Merkle–Damgård strengthening as used by SHA-224 (FIPS 180-4 §5.1.1).

use std::mem;

/// Bytes in one block of the padded message.
pub const BLOCK_SIZE: usize = 64;

/// Bytes in the trailing big-endian message length field.
pub const LENGTH_SIZE: usize = mem::size_of::<u64>();

/// Pad a message out to a whole number of blocks
/// ```
/// use rusty_sha224::crypto::pad::pad;
/// let padded = pad(b"abc");
/// assert_eq!(padded.len(), 64);
/// assert_eq!(&padded[..4], &[b'a', b'b', b'c', 0x80]);
/// assert_eq!(&padded[56..], &24u64.to_be_bytes());
/// ```
pub fn pad(message: impl AsRef<[u8]>) -> Vec<u8> {
    let message = message.as_ref();
    let mut out = Vec::with_capacity(padded_len(message.len()));
    out.extend_from_slice(message);
    pad_into(&mut out);
    out
}

/// Pad the message held in a Vec in place
pub fn pad_into(data: &mut Vec<u8>) {
    let message_length = data.len();
    // bit lengths past u64::MAX are outside what the length field can describe
    let bit_length = (message_length as u64).wrapping_mul(u8::BITS as u64);

    data.push(0x80);
    data.resize(padded_len(message_length) - LENGTH_SIZE, 0);
    data.extend_from_slice(&bit_length.to_be_bytes());
}

/// The smallest multiple of the block size that fits the message, the 0x80 marker and the length
pub const fn padded_len(message_length: usize) -> usize {
    (message_length + 1 + LENGTH_SIZE).div_ceil(BLOCK_SIZE) * BLOCK_SIZE
}
