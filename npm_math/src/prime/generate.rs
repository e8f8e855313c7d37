//! Random prime generation.
//!
//! Candidates are drawn from a caller-supplied [`ByteSource`], forced to full bit length and
//! oddness, loaded as big-endian magnitudes and tested with [`is_prime`] until one passes.
//!
//! # Examples
//!
//! ```rust
//! use npm_math::prime::generate::{PrimeGenerator, ParityClass, RngSource};
//! use rand::rngs::OsRng;
//!
//! fn make_prime() -> Result<(), npm_math::misc::MathError> {
//!     let mut source = RngSource::new(OsRng);
//!     let prime = PrimeGenerator::new(64)
//!         .parity(ParityClass::OddSecondBit)
//!         .max_attempts(Some(100_000))
//!         .generate(&mut source)?;
//!     assert_eq!(prime.unsigned_bin_size(), 64);
//!     Ok(())
//! }
//! ```
//!
//! # Important Notes
//!
//! - Candidate bytes live in a [`Zeroizing`] buffer and are wiped on every exit path
//! - A short read from the source aborts generation; partial output is never used
//! - Without an attempt bound the search terminates with probability one but has no hard limit

use crate::bigint::BigInt;
use crate::misc::MathError;
use crate::prime::{is_prime, PRIME_TABLE_SIZE};
use rand::RngCore;
use zeroize::Zeroizing;

/// Smallest accepted prime length in bytes
pub const MIN_PRIME_BYTES: usize = 2;
/// Largest accepted prime length in bytes
pub const MAX_PRIME_BYTES: usize = 512;
/// Miller–Rabin rounds applied to each candidate unless configured otherwise
pub const DEFAULT_PRIME_ROUNDS: usize = 40;

/// A producer of random bytes
pub trait ByteSource {
    /// Fills as much of `dest` as possible and returns how many bytes were written. Anything
    /// short of `dest.len()` is treated as a failure by the caller
    fn read(&mut self, dest: &mut [u8]) -> usize;
}

impl<T: ByteSource + ?Sized> ByteSource for &mut T {
    fn read(&mut self, dest: &mut [u8]) -> usize {
        (**self).read(dest)
    }
}

/// Adapts any [`RngCore`] into a [`ByteSource`]. A generator error is reported as zero bytes
pub struct RngSource<R> {
    rng: R,
}

impl<R: RngCore> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: RngCore> ByteSource for RngSource<R> {
    fn read(&mut self, dest: &mut [u8]) -> usize {
        match self.rng.try_fill_bytes(dest) {
            Ok(()) => dest.len(),
            Err(err) => {
                log::warn!(target: "npm", "random generator failed: {err}");
                0
            }
        }
    }
}

/// Which low-order bits are forced on every candidate, on top of the two top bits
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ParityClass {
    /// Only the lowest bit is forced (candidates are odd)
    #[default]
    Odd,
    /// The two lowest bits are forced (candidates are congruent to 3 mod 4)
    OddSecondBit,
}

impl ParityClass {
    fn low_mask(self) -> u8 {
        match self {
            ParityClass::Odd => 0x01,
            ParityClass::OddSecondBit => 0x01 | 0x02,
        }
    }
}

/// Configures and runs a random prime search
#[derive(Copy, Clone, Debug)]
pub struct PrimeGenerator {
    len: usize,
    parity: ParityClass,
    rounds: usize,
    max_attempts: Option<usize>,
}

impl PrimeGenerator {
    /// A generator for primes of exactly `len` bytes
    pub fn new(len: usize) -> Self {
        Self {
            len,
            parity: ParityClass::default(),
            rounds: DEFAULT_PRIME_ROUNDS,
            max_attempts: None,
        }
    }

    pub fn parity(mut self, parity: ParityClass) -> Self {
        self.parity = parity;
        self
    }

    /// Miller–Rabin rounds applied to each candidate
    pub fn rounds(mut self, rounds: usize) -> Self {
        self.rounds = rounds;
        self
    }

    /// Bounds the number of candidates drawn. `None` searches until a prime is found
    pub fn max_attempts(mut self, max_attempts: Option<usize>) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    fn validate(&self) -> Result<(), MathError> {
        if !(MIN_PRIME_BYTES..=MAX_PRIME_BYTES).contains(&self.len) {
            log::debug!(target: "npm", "rejected prime length of {} bytes", self.len);
            return Err(MathError::InvalidArgument(
                "prime length must lie between 2 and 512 bytes",
            ));
        }

        if self.rounds == 0 || self.rounds > PRIME_TABLE_SIZE {
            return Err(MathError::InvalidArgument(
                "round count must lie between one and the prime table size",
            ));
        }

        Ok(())
    }

    /// Draws candidates from `source` until one is probably prime
    pub fn generate<S: ByteSource + ?Sized>(&self, source: &mut S) -> Result<BigInt, MathError> {
        self.validate()?;

        let mut buf = Vec::new();
        buf.try_reserve_exact(self.len)?;
        buf.resize(self.len, 0u8);
        let mut buf = Zeroizing::new(buf);

        let mut candidate = BigInt::with_capacity(self.len.div_ceil(4))?;
        let mut attempts = 0usize;

        loop {
            if self.max_attempts.is_some_and(|max| attempts >= max) {
                log::debug!(target: "npm", "prime search gave up after {attempts} candidates");
                return Err(MathError::AttemptsExhausted(attempts));
            }
            attempts += 1;

            let produced = source.read(&mut buf);
            if produced != self.len {
                log::warn!(target: "npm", "random source produced {produced} of {} bytes", self.len);
                return Err(MathError::RandomSourceFailure {
                    requested: self.len,
                    produced,
                });
            }

            buf[0] |= 0x80 | 0x40;
            buf[self.len - 1] |= self.parity.low_mask();

            candidate.load_be_bytes(&buf)?;
            if is_prime(&candidate, self.rounds)? {
                log::trace!(
                    target: "npm",
                    "found a {}-bit prime after {attempts} candidates",
                    candidate.count_bits()
                );
                return Ok(candidate);
            }
        }
    }
}

/// Generates a random prime of exactly `len` bytes with the default round count
pub fn rand_prime<S: ByteSource + ?Sized>(
    len: usize,
    parity: ParityClass,
    source: &mut S,
) -> Result<BigInt, MathError> {
    PrimeGenerator::new(len).parity(parity).generate(source)
}
