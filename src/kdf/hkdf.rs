//! Streaming HKDF expand stage, defined in
//! [RFC 5869](https://tools.ietf.org/html/rfc5869).

use core::marker::PhantomData;

use cryptraits::{convert::Len, hmac::Hmac};
use zeroize::Zeroize;

use crate::errors::KdfError;

/// Hard RFC 5869 limit on the number of expansion blocks per derivation.
pub const MAX_BLOCKS: usize = 255;

/// Incremental HKDF generator over a PRF.
///
/// Extract runs once at construction and keys the generator with the
/// resulting PRK. [`fill`](Self::fill) then derives output keying
/// material on demand, in chunks of any size, caching the unconsumed
/// suffix of the last expansion block between calls. A generator can
/// deliver at most `255 * PRF::LEN` bytes over its whole lifetime.
pub struct Hkdf<PRF>
where
    PRF: Hmac + Len,
{
    prk: Vec<u8>,
    info: Vec<u8>,

    /// Last expansion block `T(i)`, empty before the first.
    previous: Vec<u8>,
    /// Bytes of `previous` already delivered; the cache is the rest.
    consumed: usize,
    /// Next block index, in `[1, 256]`. 256 means the ceiling is hit.
    counter: u16,
    released: bool,

    _prf: PhantomData<PRF>,
}

impl<PRF> Hkdf<PRF>
where
    PRF: Hmac + Len,
{
    /// Extract a PRK from `ikm` and `salt` and return a generator
    /// ready to expand it with `info`. Absent parameters behave like
    /// empty byte strings.
    pub fn new(
        ikm: Option<&[u8]>,
        salt: Option<&[u8]>,
        info: Option<&[u8]>,
    ) -> Result<Self, KdfError> {
        let prk = Self::extract(salt, ikm.unwrap_or(&[]))?;
        Ok(Self::with_prk(prk, info))
    }

    /// Build a generator around an already extracted PRK.
    pub fn from_prk(prk: &[u8], info: Option<&[u8]>) -> Self {
        Self::with_prk(Vec::from(prk), info)
    }

    /// Compute `PRK = HMAC(salt, ikm)`.
    ///
    /// An empty or absent salt keys the HMAC with an empty string,
    /// which the HMAC zero-pads to its block size and is therefore
    /// equivalent to the `HashLen` zeros RFC 5869 prescribes.
    pub fn extract(salt: Option<&[u8]>, ikm: &[u8]) -> Result<Vec<u8>, KdfError> {
        let mut prf = PRF::new_from_slice(salt.unwrap_or(&[])).or(Err(KdfError::InvalidLength))?;
        prf.update(ikm);

        Ok(prf.finalize())
    }

    fn with_prk(prk: Vec<u8>, info: Option<&[u8]>) -> Self {
        Self {
            prk,
            info: Vec::from(info.unwrap_or(&[])),
            previous: Vec::new(),
            consumed: 0,
            counter: 1,
            released: false,
            _prf: PhantomData,
        }
    }

    /// Fill `okm` with the next `okm.len()` bytes of output keying
    /// material.
    ///
    /// All-or-nothing: either the whole buffer is written, or an error
    /// is returned and neither the buffer nor the generator state has
    /// changed. Consecutive calls continue the same OKM stream, so
    /// `fill(n)` followed by `fill(m)` yields the same bytes as a
    /// single `fill(n + m)`.
    pub fn fill(&mut self, okm: &mut [u8]) -> Result<(), KdfError> {
        if self.released {
            return Err(KdfError::UseAfterRelease);
        }

        if self.available() < okm.len() {
            return Err(KdfError::OutputLimitExceeded);
        }

        let mut filled = self.drain(okm);

        while filled < okm.len() {
            self.derive_block()?;
            filled += self.drain(&mut okm[filled..]);
        }

        Ok(())
    }

    /// Bytes still obtainable over the rest of the generator's
    /// lifetime: the cached remainder of the last block plus every
    /// block the counter still permits.
    pub fn available(&self) -> usize {
        let cached = self.previous.len() - self.consumed;

        cached + (MAX_BLOCKS + 1 - usize::from(self.counter)) * PRF::LEN
    }

    /// Output size of the underlying hash in bytes.
    pub fn size(&self) -> usize {
        PRF::LEN
    }

    /// Zeroize the key material and take the generator out of service.
    ///
    /// Idempotent. Any [`fill`](Self::fill) after release fails with
    /// [`KdfError::UseAfterRelease`]. Dropping the generator releases
    /// it as well.
    pub fn release(&mut self) {
        if !self.released {
            self.zeroize();
            self.released = true;
        }
    }

    /// `T(i) = HMAC(PRK, T(i-1) || info || i)`, replacing the cache
    /// with the fresh block.
    fn derive_block(&mut self) -> Result<(), KdfError> {
        debug_assert!(usize::from(self.counter) <= MAX_BLOCKS);

        let mut prf = PRF::new_from_slice(&self.prk).or(Err(KdfError::InvalidLength))?;
        prf.update(&self.previous);
        prf.update(&self.info);
        prf.update(&[self.counter as u8]);

        self.previous.zeroize();
        self.previous = prf.finalize();
        self.consumed = 0;
        self.counter += 1;

        Ok(())
    }

    /// Copy as much of the cache as fits into `okm`, never
    /// re-delivering consumed bytes.
    fn drain(&mut self, okm: &mut [u8]) -> usize {
        let n = core::cmp::min(self.previous.len() - self.consumed, okm.len());
        okm[..n].copy_from_slice(&self.previous[self.consumed..self.consumed + n]);
        self.consumed += n;

        n
    }
}

impl<PRF> Zeroize for Hkdf<PRF>
where
    PRF: Hmac + Len,
{
    fn zeroize(&mut self) {
        self.prk.zeroize();
        self.info.zeroize();
        self.previous.zeroize();
        self.consumed = 0;
    }
}

impl<PRF> Drop for Hkdf<PRF>
where
    PRF: Hmac + Len,
{
    fn drop(&mut self) {
        self.release();
    }
}
