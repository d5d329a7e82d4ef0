//! HKDF sha1.

use cryptraits::kdf::Kdf as KdfTrait;
use zeroize::Zeroize;

use crate::{errors::KdfError, kdf::hkdf::Hkdf};

/// Streaming HKDF-SHA1 generator.
pub type Generator = Hkdf<crate::hmac::sha1::Hmac>;

/// One-shot HKDF-SHA1.
#[derive(Zeroize)]
#[zeroize(drop)]
pub struct Kdf {
    prk: Vec<u8>,
}

impl KdfTrait for Kdf {
    type E = KdfError;

    fn new(salt: Option<&[u8]>, data: &[u8]) -> Self {
        let prk = Generator::extract(salt, data).unwrap();

        Self { prk }
    }

    fn expand(&self, info: &[u8], okm: &mut [u8]) -> Result<(), Self::E> {
        let mut hkdf = Generator::from_prk(&self.prk, Some(info));

        hkdf.fill(okm)
    }
}
