//! Conversion between big-endian byte strings and 32-bit words.

use crate::util::try_cast_as_arrays;

pub const WORD_BYTES: usize = u32::BITS as usize / u8::BITS as usize;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum WordError {
    /// A byte string whose length is not a multiple of four.
    InvalidLength(usize),
    /// A word sequence whose length is not a whole number of 16 word blocks.
    PartialBlock(usize),
}

impl std::fmt::Display for WordError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for WordError {}

/// Read every consecutive 4 bytes as one big-endian `u32`
/// ```
/// use rusty_sha224::encoding::{to_words, WordError};
/// assert_eq!(to_words(&[0xde, 0xad, 0xbe, 0xef, 0, 0, 0, 1]), Ok(vec![0xdeadbeef, 1]));
/// assert_eq!(to_words(&[1, 2, 3]), Err(WordError::InvalidLength(3)));
/// ```
pub fn to_words(bytes: &[u8]) -> Result<Vec<u32>, WordError> {
    let chunks = try_cast_as_arrays(bytes).map_err(|e| WordError::InvalidLength(e.len))?;
    Ok(words_from_be(chunks))
}

/// Read byte groups that are already word sized as big-endian `u32`s
pub fn words_from_be(chunks: &[[u8; WORD_BYTES]]) -> Vec<u32> {
    chunks.iter().copied().map(u32::from_be_bytes).collect()
}

/// Write every word out as 4 big-endian bytes
/// ```
/// use rusty_sha224::encoding::to_bytes;
/// assert_eq!(to_bytes(&[0xdeadbeef, 1]), [0xde, 0xad, 0xbe, 0xef, 0, 0, 0, 1]);
/// ```
pub fn to_bytes(words: &[u32]) -> Vec<u8> {
    words.iter().copied().flat_map(u32::to_be_bytes).collect()
}
