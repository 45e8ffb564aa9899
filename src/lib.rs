//! crate for dealing with Base58Check encoded data
pub mod base58;
pub mod check;
#[doc(inline)]
pub use check::{checksum, decode, decode_raw, encode, encode_raw, DecodeError};
