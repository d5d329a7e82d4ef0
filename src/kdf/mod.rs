//! Key derivation functions.

use core::str::FromStr;

use crate::errors::KdfError;

pub mod hkdf;
pub mod sha1;
pub mod sha256;
pub mod sha512;

/// Hash algorithm selecting the HKDF variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Sha1,
    Sha256,
    Sha512,
}

impl FromStr for Algorithm {
    type Err = KdfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SHA-1" | "SHA1" => Ok(Self::Sha1),
            "SHA-256" | "SHA256" => Ok(Self::Sha256),
            "SHA-512" | "SHA512" => Ok(Self::Sha512),
            _ => Err(KdfError::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// HKDF generator over a runtime-selected hash.
pub enum Generator {
    Sha1(sha1::Generator),
    Sha256(sha256::Generator),
    Sha512(sha512::Generator),
}

impl Generator {
    /// Run Extract with the given parameters and return a generator
    /// ready to produce output keying material.
    pub fn new(
        algorithm: Algorithm,
        ikm: Option<&[u8]>,
        salt: Option<&[u8]>,
        info: Option<&[u8]>,
    ) -> Result<Self, KdfError> {
        match algorithm {
            Algorithm::Sha1 => Ok(Self::Sha1(sha1::Generator::new(ikm, salt, info)?)),
            Algorithm::Sha256 => Ok(Self::Sha256(sha256::Generator::new(ikm, salt, info)?)),
            Algorithm::Sha512 => Ok(Self::Sha512(sha512::Generator::new(ikm, salt, info)?)),
        }
    }

    /// See [`hkdf::Hkdf::fill`].
    pub fn fill(&mut self, okm: &mut [u8]) -> Result<(), KdfError> {
        match self {
            Self::Sha1(hkdf) => hkdf.fill(okm),
            Self::Sha256(hkdf) => hkdf.fill(okm),
            Self::Sha512(hkdf) => hkdf.fill(okm),
        }
    }

    /// See [`hkdf::Hkdf::available`].
    pub fn available(&self) -> usize {
        match self {
            Self::Sha1(hkdf) => hkdf.available(),
            Self::Sha256(hkdf) => hkdf.available(),
            Self::Sha512(hkdf) => hkdf.available(),
        }
    }

    /// Output size of the selected hash in bytes.
    pub fn size(&self) -> usize {
        match self {
            Self::Sha1(hkdf) => hkdf.size(),
            Self::Sha256(hkdf) => hkdf.size(),
            Self::Sha512(hkdf) => hkdf.size(),
        }
    }

    /// See [`hkdf::Hkdf::release`].
    pub fn release(&mut self) {
        match self {
            Self::Sha1(hkdf) => hkdf.release(),
            Self::Sha256(hkdf) => hkdf.release(),
            Self::Sha512(hkdf) => hkdf.release(),
        }
    }
}
