//! the Base58Check layer: a double-SHA-256 checksum on top of [`base58`]
use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::base58;

/// the first 4 bytes of `SHA256(SHA256(data))`
#[must_use]
pub fn checksum(data: &[u8]) -> [u8; 4] {
    let digest = Sha256::digest(Sha256::digest(data));
    let mut out = [0u8; 4];
    out.copy_from_slice(&digest[..4]);
    out
}

/// encodes the version byte followed by `payload`, with the checksum of both
/// appended
#[must_use]
pub fn encode(payload: &[u8], version: u8) -> String {
    let mut full = Vec::with_capacity(payload.len() + 5);
    full.push(version);
    full.extend_from_slice(payload);
    let check = checksum(&full);
    full.extend_from_slice(&check);
    base58::encode(&full)
}

/// encodes `data` as is, with its checksum appended
///
/// unlike [`encode`] this gives no meaning to the first byte, so anything
/// [`decode_raw`] accepts round-trips, even buffers shorter than a version
/// byte
#[must_use]
pub fn encode_raw(data: &[u8]) -> String {
    let mut full = Vec::with_capacity(data.len() + 4);
    full.extend_from_slice(data);
    full.extend_from_slice(&checksum(data));
    base58::encode(&full)
}

/// the inverse of [`encode`], yielding the payload and the version byte
pub fn decode(input: &str) -> Result<(Vec<u8>, u8), DecodeError> {
    let full = base58::decode(input)?;
    // a version byte plus the checksum at minimum
    if full.len() < 5 {
        return Err(DecodeError::TooShort { len: full.len() });
    }
    let mut data = strip_checksum(full)?;
    let payload = data.split_off(1);
    Ok((payload, data[0]))
}

/// the inverse of [`encode_raw`], yielding the data without its checksum
pub fn decode_raw(input: &str) -> Result<Vec<u8>, DecodeError> {
    let full = base58::decode(input)?;
    if full.len() < 4 {
        return Err(DecodeError::TooShort { len: full.len() });
    }
    strip_checksum(full)
}

fn strip_checksum(mut full: Vec<u8>) -> Result<Vec<u8>, DecodeError> {
    let len = full.len() - 4;
    let expect = checksum(&full[..len]);
    let mut have = [0u8; 4];
    have.copy_from_slice(&full[len..]);
    if have != expect {
        return Err(DecodeError::Mismatch { expect, have });
    }
    full.truncate(len);
    Ok(full)
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum DecodeError {
    #[error("malformed base-58 in input")]
    Base58 {
        #[from]
        source: base58::DecodeError,
    },
    #[error("decoded data too short ({len} bytes)")]
    TooShort { len: usize },
    #[error("checksum mismatch (expected {expect:02x?} but got {have:02x?})")]
    Mismatch { expect: [u8; 4], have: [u8; 4] },
}
