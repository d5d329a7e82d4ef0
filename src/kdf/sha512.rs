//! HKDF sha512.

use cryptraits::kdf::Kdf as KdfTrait;
use zeroize::Zeroize;

use crate::{errors::KdfError, kdf::hkdf::Hkdf};

/// Streaming HKDF-SHA512 generator.
pub type Generator = Hkdf<crate::hmac::sha512::Hmac>;

/// One-shot HKDF-SHA512.
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

#[cfg(test)]
mod tests {
    use cryptraits::kdf::Kdf as _;
    use hex_literal::hex;

    use super::{Generator, Kdf};

    // RFC 5869 A.1 parameters carried over to SHA-512.
    #[test]
    fn test_basic() {
        let ikm = [0x0b; 22];
        let salt = hex!("000102030405060708090a0b0c");
        let info = hex!("f0f1f2f3f4f5f6f7f8f9");

        let kdf = Kdf::new(Some(&salt), &ikm);
        let mut okm = [0; 42];
        kdf.expand(&info, &mut okm).unwrap();

        assert_eq!(
            okm,
            hex!("832390086cda71fb47625bb5ceb168e4c8e26a1a16ed34d9fc7fe92c1481579338da362cb8d9f925d7cb")
        );
    }

    #[test]
    fn test_chunked_fill_matches_single_fill() {
        let ikm = [0x0b; 22];
        let salt = hex!("000102030405060708090a0b0c");

        let mut whole = Generator::new(Some(&ikm), Some(&salt), None).unwrap();
        let mut chunked = Generator::new(Some(&ikm), Some(&salt), None).unwrap();

        let mut expected = [0; 150];
        whole.fill(&mut expected).unwrap();

        // 64-byte blocks; split mid-block, at a boundary and past it.
        let mut okm = [0; 150];
        let (head, rest) = okm.split_at_mut(30);
        let (middle, tail) = rest.split_at_mut(98);
        chunked.fill(head).unwrap();
        chunked.fill(middle).unwrap();
        chunked.fill(tail).unwrap();

        assert_eq!(okm, expected);
    }
}
