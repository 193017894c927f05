pub mod pad;
pub mod sha224;

pub use pad::pad;
pub use sha224::{compress, hash, Sha224Digest};
