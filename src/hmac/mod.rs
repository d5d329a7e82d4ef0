//! Keyed-hash (HMAC) primitives used by the KDF.

pub mod sha1;
pub mod sha256;
pub mod sha512;
