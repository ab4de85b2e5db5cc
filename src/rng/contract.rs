//! Randomness contract used by key generation and the ECDSA test harness.
//!
//! The bignum and curve layers never touch an RNG directly; only keypair
//! generation needs random scalars, and it needs them through a narrow
//! trait so a caller can substitute a deterministic source in tests or a
//! hardware TRNG in a backend that provides one.

use crate::rng::Csprng;

/// Failure of a randomness source.
///
/// The software source in this crate never fails once constructed, but the
/// trait leaves room for a backend whose entropy source can be exhausted
/// or become unavailable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RngError {
    /// The source could not produce randomness.
    Unavailable,
}

/// A source of cryptographically secure random words.
///
/// Implementors must not produce output that is predictable from prior
/// output; this is the only property the curve layer relies on.
pub trait RngSource {
    /// Returns one uniformly random 32-bit word.
    fn next_u32(&mut self) -> Result<u32, RngError>;

    /// Fills `out` with uniformly random bytes.
    fn fill(&mut self, out: &mut [u8]) -> Result<(), RngError>;
}

/// The default [`RngSource`], backed by the crate's ChaCha20 DRBG seeded
/// from the operating system's CSPRNG.
pub struct SoftwareRng {
    inner: Csprng,
}

impl SoftwareRng {
    /// Seeds a new generator from the operating system.
    pub fn new() -> Self {
        Self {
            inner: Csprng::from_os(),
        }
    }

    /// Builds a generator from caller-supplied seed material.
    ///
    /// Intended for reproducible tests; production callers should use
    /// [`SoftwareRng::new`].
    pub fn from_seed(seed: [u8; 32]) -> Self {
        Self {
            inner: Csprng::from_seed(seed),
        }
    }
}

impl Default for SoftwareRng {
    fn default() -> Self {
        Self::new()
    }
}

impl RngSource for SoftwareRng {
    fn next_u32(&mut self) -> Result<u32, RngError> {
        let mut buf = [0u8; 4];
        self.inner.fill_bytes(&mut buf);
        Ok(u32::from_le_bytes(buf))
    }

    fn fill(&mut self, out: &mut [u8]) -> Result<(), RngError> {
        self.inner.fill_bytes(out);
        Ok(())
    }
}
