//! SHA-224 (FIPS 180-4) over whole in-memory messages.
//!
//! ```
//! use rusty_sha224::encoding::Encodable;
//! let digest = rusty_sha224::hash(b"");
//! assert_eq!(
//!     digest.encode_hex(),
//!     "d14a028c2a3a2bc9476102bb288234c415a2b01f828ea62ac5b3e42f"
//! );
//! ```

pub mod crypto;
pub mod encoding;
pub mod util;

pub use crypto::{compress, hash, pad, Sha224Digest};
pub use encoding::{to_bytes, to_words};
