//! Crate custom errors.

use cryptraits_macros::Error;

/// HMAC algorithm errors.
#[derive(Debug, Error)]
pub enum HmacError {
    InvalidLength,
    MacError,
}

/// KDF algorithm errors.
#[derive(Debug, Error, PartialEq)]
pub enum KdfError {
    /// An unknown hash algorithm name was requested.
    UnknownAlgorithm(String),
    /// The request would exceed the 255-block lifetime output ceiling.
    OutputLimitExceeded,
    /// The generator has already been released.
    UseAfterRelease,
    /// The underlying HMAC rejected its key material.
    InvalidLength,
}
