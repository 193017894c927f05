//! SHA-224 implemented as per FIPS 180-4: https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.180-4.pdf
use std::fmt;
use std::str::FromStr;

use tracing::{trace, trace_span};

use crate::crypto::pad::pad;
use crate::encoding::{
    to_bytes, to_hex, words_from_be, Decodable, DecodingError, Encodable, WordError, WORD_BYTES,
};
use crate::util::try_cast_as_arrays;

use context::*;

macro_rules! Ch {
    ($x:expr, $y:expr, $z:expr) => {
        ($x & $y) ^ (!$x & $z)
    };
}

macro_rules! Maj {
    ($x:expr, $y:expr, $z:expr) => {
        ($x & $y) ^ ($x & $z) ^ ($y & $z)
    };
}

pub mod context {
    const H0: u32 = 0xc1059ed8;
    const H1: u32 = 0x367cd507;
    const H2: u32 = 0x3070dd17;
    const H3: u32 = 0xf70e5939;
    const H4: u32 = 0xffc00b31;
    const H5: u32 = 0x68581511;
    const H6: u32 = 0x64f98fa7;
    const H7: u32 = 0xbefa4fa4;

    pub const INIT_STATE: [Word; STATE_SIZE] = [H0, H1, H2, H3, H4, H5, H6, H7];

    #[rustfmt::skip]
    pub const K: [Word; ROUNDS] = [
        0x428a2f98, 0x71374491, 0xb5c0fbcf, 0xe9b5dba5, 0x3956c25b, 0x59f111f1, 0x923f82a4, 0xab1c5ed5,
        0xd807aa98, 0x12835b01, 0x243185be, 0x550c7dc3, 0x72be5d74, 0x80deb1fe, 0x9bdc06a7, 0xc19bf174,
        0xe49b69c1, 0xefbe4786, 0x0fc19dc6, 0x240ca1cc, 0x2de92c6f, 0x4a7484aa, 0x5cb0a9dc, 0x76f988da,
        0x983e5152, 0xa831c66d, 0xb00327c8, 0xbf597fc7, 0xc6e00bf3, 0xd5a79147, 0x06ca6351, 0x14292967,
        0x27b70a85, 0x2e1b2138, 0x4d2c6dfc, 0x53380d13, 0x650a7354, 0x766a0abb, 0x81c2c92e, 0x92722c85,
        0xa2bfe8a1, 0xa81a664b, 0xc24b8b70, 0xc76c51a3, 0xd192e819, 0xd6990624, 0xf40e3585, 0x106aa070,
        0x19a4c116, 0x1e376c08, 0x2748774c, 0x34b0bcb5, 0x391c0cb3, 0x4ed8aa4a, 0x5b9cca4f, 0x682e6ff3,
        0x748f82ee, 0x78a5636f, 0x84c87814, 0x8cc70208, 0x90befffa, 0xa4506ceb, 0xbef9a3f7, 0xc67178f2,
    ];

    #[allow(non_snake_case)]
    pub const fn Σ_0(x: Word) -> Word {
        x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
    }

    #[allow(non_snake_case)]
    pub const fn Σ_1(x: Word) -> Word {
        x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
    }

    pub const fn σ_0(x: Word) -> Word {
        x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
    }

    pub const fn σ_1(x: Word) -> Word {
        x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
    }

    pub const STATE_SIZE: usize = 8;
    /// Words of the final state that make it into the digest, H7 is dropped.
    pub const DIGEST_SIZE: usize = 7;
    pub const BLOCK_WORDS: usize = 16;
    pub const ROUNDS: usize = 64;
    pub type Word = u32;
}

/// The running hash value carried from one block to the next
pub type State = [Word; STATE_SIZE];

/// One 512-bit block of the padded message, parsed into words
pub type Block = [Word; BLOCK_WORDS];

/// Bytes in a SHA-224 digest
pub const DIGEST_BYTES: usize = DIGEST_SIZE * WORD_BYTES;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Sha224Digest(pub [u8; DIGEST_BYTES]);

impl AsRef<[u8]> for Sha224Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Encodable for Sha224Digest {
    fn encode_hex(&self) -> String {
        self.0.encode_hex()
    }
}

impl fmt::Display for Sha224Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_hex(self.0))
    }
}

impl FromStr for Sha224Digest {
    type Err = DecodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.decode_hex()?;
        let digest = bytes
            .try_into()
            .map_err(|bytes: Vec<u8>| DecodingError::InvalidLength(bytes.len()))?;
        Ok(Self(digest))
    }
}

impl From<State> for Sha224Digest {
    /// Serialise the state big-endian and keep the leading 224 bits
    fn from(state: State) -> Self {
        let bytes = to_bytes(&state);
        let mut digest = [0; DIGEST_BYTES];
        digest.copy_from_slice(&bytes[..DIGEST_BYTES]);
        Self(digest)
    }
}

/// Hash a complete message
/// ```
/// use rusty_sha224::crypto::sha224::hash;
/// assert_eq!(
///     hash("abc").to_string(),
///     "23097d223405d8228642a477bda255b32aadbce4bda0b3f7e36c9da7"
/// );
/// ```
pub fn hash(message: impl AsRef<[u8]>) -> Sha224Digest {
    let message = message.as_ref();
    let _span = trace_span!("sha224", len = message.len()).entered();

    let padded = pad(message);
    // padding always yields whole blocks, so nothing is left over
    let (chunks, _) = padded.as_chunks::<WORD_BYTES>();
    let words = words_from_be(chunks);
    let (blocks, _) = words.as_chunks::<BLOCK_WORDS>();
    trace!(blocks = blocks.len(), "compressing padded message");

    let mut state = INIT_STATE;
    compress_blocks(&mut state, blocks);
    state.into()
}

/// Run the compression function over every 16 word block in `words`
pub fn compress(mut state: State, words: &[Word]) -> Result<State, WordError> {
    let blocks = try_cast_as_arrays(words).map_err(|e| WordError::PartialBlock(e.len))?;
    compress_blocks(&mut state, blocks);
    Ok(state)
}

fn compress_blocks(state: &mut State, blocks: &[Block]) {
    for block in blocks {
        process_block(state, block);
    }
}

/// Expand a block into the full message schedule
#[allow(non_snake_case)]
fn schedule(block: &Block) -> [Word; ROUNDS] {
    let mut W: [Word; ROUNDS] = [0; ROUNDS];
    W[..BLOCK_WORDS].copy_from_slice(block);

    for t in BLOCK_WORDS..ROUNDS {
        W[t] = σ_1(W[t - 2])
            .wrapping_add(W[t - 7])
            .wrapping_add(σ_0(W[t - 15]))
            .wrapping_add(W[t - 16]);
    }

    W
}

#[allow(non_snake_case)]
fn process_block(state: &mut State, block: &Block) {
    // The message schedule
    let W = schedule(block);

    // Working variables
    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;

    // Compute the core rounds
    for t in 0..ROUNDS {
        let T1 = h
            .wrapping_add(Σ_1(e))
            .wrapping_add(Ch!(e, f, g))
            .wrapping_add(K[t])
            .wrapping_add(W[t]);
        let T2 = Σ_0(a).wrapping_add(Maj!(a, b, c));
        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(T1);
        d = c;
        c = b;
        b = a;
        a = T1.wrapping_add(T2);
    }

    // Compute the intermediate hash values
    for (word, v) in state.iter_mut().zip([a, b, c, d, e, f, g, h]) {
        *word = word.wrapping_add(v);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::to_words;

    #[test]
    fn test_sigma_functions() {
        assert_eq!(Σ_0(1), 0x4008_0400);
        assert_eq!(Σ_1(1), 0x0420_0080);
        assert_eq!(σ_0(1), 0x0200_4000);
        assert_eq!(σ_1(1), 0x0000_a000);
    }

    #[test]
    fn test_small_sigma_shift_is_logical() {
        // an arithmetic shift would smear the top bit into 0xf0000000
        assert_eq!(σ_0(0x8000_0000), 0x1100_2000);
    }

    #[test]
    fn test_ch_maj() {
        assert_eq!(Ch!(0xff00ff00u32, 0x12345678u32, 0x9abcdef0u32), 0x12bc56f0);
        assert_eq!(Maj!(0xf0f0f0f0u32, 0xff00ff00u32, 0x0f0f0f0fu32), 0xff00ff00);
    }

    #[test]
    fn test_schedule_abc() -> Result<(), WordError> {
        let words = to_words(&pad("abc"))?;
        let block: Block = words[..BLOCK_WORDS].try_into().unwrap();
        let w = schedule(&block);
        assert_eq!(&w[..BLOCK_WORDS], &block[..]);
        assert_eq!(w[16], 0x6162_6380);
        assert_eq!(w[17], 0x000f_0000);
        Ok(())
    }

    #[test]
    fn test_compress_abc_full_state() -> Result<(), WordError> {
        let words = to_words(&pad("abc"))?;
        let state = compress(INIT_STATE, &words)?;
        assert_eq!(
            state,
            [
                0x23097d22, 0x3405d822, 0x8642a477, 0xbda255b3, 0x2aadbce4, 0xbda0b3f7, 0xe36c9da7,
                0xd2da082d,
            ]
        );
        Ok(())
    }

    #[test]
    fn test_compress_no_words_is_identity() -> Result<(), WordError> {
        assert_eq!(compress(INIT_STATE, &[])?, INIT_STATE);
        Ok(())
    }

    #[test]
    fn test_compress_zero_block() -> Result<(), WordError> {
        let state = compress(INIT_STATE, &[0; BLOCK_WORDS])?;
        assert_eq!(state[0], 0xdb04d220);
        assert_eq!(state[7], 0x17a572bc);
        Ok(())
    }

    #[test]
    fn test_compress_rejects_partial_block() {
        assert_eq!(
            compress(INIT_STATE, &[0; 17]),
            Err(WordError::PartialBlock(17))
        );
        assert_eq!(
            compress(INIT_STATE, &[0; 15]),
            Err(WordError::PartialBlock(15))
        );
    }

    #[test]
    fn test_hash_matches_compress_pipeline() -> Result<(), WordError> {
        let message = b"The quick brown fox jumps over the lazy dog";
        let state = compress(INIT_STATE, &to_words(&pad(message))?)?;
        assert_eq!(hash(message), Sha224Digest::from(state));
        Ok(())
    }

    #[test]
    fn test_hash_agrees_with_to_words_compress_at_every_length() -> Result<(), WordError> {
        let message: Vec<u8> = (0..=200).collect();
        for len in 0..message.len() {
            let words = to_words(&pad(&message[..len]))?;
            let state = compress(INIT_STATE, &words)?;
            assert_eq!(hash(&message[..len]), Sha224Digest::from(state), "length {len}");
        }
        Ok(())
    }

    #[test]
    fn test_digest_drops_last_word() {
        let state: State = [1, 2, 3, 4, 5, 6, 7, 0xdeadbeef];
        let digest = Sha224Digest::from(state);
        assert_eq!(digest.0.len(), 28);
        assert_eq!(&digest.0[24..], &[0, 0, 0, 7]);
    }

    #[test]
    fn test_digest_parse() -> Result<(), DecodingError> {
        let text = "23097D223405D8228642A477BDA255B32AADBCE4BDA0B3F7E36C9DA7";
        let digest: Sha224Digest = text.parse()?;
        assert_eq!(digest, hash("abc"));
        assert_eq!(digest.to_string(), text.to_lowercase());
        Ok(())
    }

    #[test]
    fn test_digest_parse_wrong_length() {
        assert_eq!(
            "d14a028c".parse::<Sha224Digest>(),
            Err(DecodingError::InvalidLength(4))
        );
    }

    // test vectors from https://www.di-mgt.com.au/sha_testvectors.html
    #[test]
    fn test_sha224_testvectors() {
        let test_vectors = [
            ("abc", "23097d223405d8228642a477bda255b32aadbce4bda0b3f7e36c9da7"),
            ("", "d14a028c2a3a2bc9476102bb288234c415a2b01f828ea62ac5b3e42f"),
            (
                "abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq",
                "75388b16512776cc5dba5da1fd890150b0c6455cb4f58b1952522525",
            ),
            (
                "abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmnhijklmnoijklmnopjklmnopqklmnopqrlmnopqrsmnopqrstnopqrstu",
                "c97ca9a559850ce97a04a96def6d99a9e0e0e2ab14e6b8df265fc0b3"
            ),
        ];
        for (test, correct) in test_vectors {
            assert_eq!(hash(test).encode_hex(), correct);
        }
    }
}
