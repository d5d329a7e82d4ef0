//! Incremental HKDF (HMAC-based Extract-and-Expand Key Derivation
//! Function) as defined in [RFC 5869](https://tools.ietf.org/html/rfc5869).

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod errors;
pub mod hmac;
pub mod kdf;
