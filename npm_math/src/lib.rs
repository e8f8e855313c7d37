//! # libnpm Multi-Precision Core (npm_math)
//!
//! Arbitrary-precision signed integer arithmetic and probabilistic prime generation, the
//! numeric foundation beneath libnpm's RSA key material.
//!
//! ## Features
//!
//! * **Digit Store**: growable radix 2^32 digit buffers with sign and significant-length bookkeeping
//! * **Shifts**: digit- and bit-granularity shifts, `mod 2^k` extraction
//! * **Arithmetic**: carry-propagating add/subtract, schoolbook multiply, restoring long division
//! * **Number Theory**: binary GCD, LCM, modular inverse by extended binary GCD, modular exponentiation
//! * **Primality**: trial division against the first 256 primes followed by Miller–Rabin rounds
//! * **Random Primes**: candidates drawn from any [`prime::generate::ByteSource`], including `rand` generators
//!
//! ## Important Notes
//!
//! * Every fallible operation returns a [`misc::MathError`]; allocation failure is reported, not aborted on
//! * Digit buffers are zeroized when dropped and when replaced by a larger allocation
//! * All operations are synchronous; the random byte source is the only call that may block
//!
//! ## Related Components
//!
//! * `npm_logging`: log bootstrap for binaries and tests embedding this crate
//!

#![deny(
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces,
    variant_size_differences,
    unused_features,
    unused_results
)]

/// Convenient imports for external use
pub mod prelude {
    pub use crate::bigint::{BigInt, Digit, Sign, DIGIT_BIT, PRECISION};
    pub use crate::misc::MathError;
    pub use crate::prime::generate::{
        rand_prime, ByteSource, ParityClass, PrimeGenerator, RngSource, DEFAULT_PRIME_ROUNDS,
        MAX_PRIME_BYTES, MIN_PRIME_BYTES,
    };
    pub use crate::prime::{is_divisible, is_prime, miller_rabin, PRIME_TABLE, PRIME_TABLE_SIZE};
}

/// The arbitrary-precision integer and its arithmetic
pub mod bigint;
/// Error type
pub mod misc;
/// Primality testing and random prime generation
pub mod prime;
