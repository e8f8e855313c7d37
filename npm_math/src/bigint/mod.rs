//! Digit store for the multi-precision engine.
//!
//! A [`BigInt`] owns a zero-filled buffer of radix 2^32 digits stored least significant
//! first, a count of significant digits and a sign. Every digit at or above `used` is zero
//! at all times; the arithmetic modules rely on that when they read past the end of the
//! shorter operand.
//!
//! # Important Notes
//!
//! - Buffers only ever grow. Growth rounds up to a multiple of [`PRECISION`] and zeroizes
//!   the buffer being replaced.
//! - Dropping a [`BigInt`] zeroizes every digit of its buffer.
//! - There is no negative zero: a value with `used == 0` is always [`Sign::Positive`].

use crate::misc::MathError;
use byteorder::{BigEndian, ByteOrder};
use std::fmt::{Debug, Formatter, LowerHex, UpperHex};
use zeroize::{Zeroize, ZeroizeOnDrop};

mod add;
mod cmp;
mod div;
mod exptmod;
mod gcd;
mod invmod;
mod mul;
mod shift;

/// A single digit of the positional representation
pub type Digit = u32;
/// Double-width accumulator used for carries and digit products
pub(crate) type Word = u64;

/// Number of bits held by a [`Digit`]
pub const DIGIT_BIT: usize = 32;
/// Mask selecting the low [`DIGIT_BIT`] bits of a [`Word`]
pub(crate) const DIGIT_MASK: Word = (1 << DIGIT_BIT) - 1;
/// Default digit capacity of a fresh integer, and the rounding quantum used when growing
pub const PRECISION: usize = 32;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Sign {
    #[default]
    Positive,
    Negative,
}

impl Sign {
    pub fn flip(self) -> Self {
        match self {
            Sign::Positive => Sign::Negative,
            Sign::Negative => Sign::Positive,
        }
    }
}

/// An arbitrary-precision signed integer. Copies go through [`BigInt::try_clone`]
pub struct BigInt {
    pub(crate) digits: Vec<Digit>,
    pub(crate) used: usize,
    pub(crate) sign: Sign,
}

/// Rounds a requested digit count up so there are always spare digits on top
fn rounded_capacity(size: usize) -> usize {
    size + (PRECISION * 2) - (size % PRECISION)
}

fn alloc_zeroed(size: usize) -> Result<Vec<Digit>, MathError> {
    let mut digits = Vec::new();
    digits.try_reserve_exact(size)?;
    digits.resize(size, 0);
    Ok(digits)
}

impl BigInt {
    /// Creates a zero-valued integer with the default capacity
    pub fn new() -> Result<Self, MathError> {
        Ok(Self {
            digits: alloc_zeroed(PRECISION)?,
            used: 0,
            sign: Sign::Positive,
        })
    }

    /// Creates a zero-valued integer able to hold at least `size` digits without growing
    pub fn with_capacity(size: usize) -> Result<Self, MathError> {
        Ok(Self {
            digits: alloc_zeroed(rounded_capacity(size))?,
            used: 0,
            sign: Sign::Positive,
        })
    }

    /// Creates `N` zero-valued integers at once. If any allocation fails, those already
    /// created are zeroized and released before the error is returned
    pub fn init_multi<const N: usize>() -> Result<[BigInt; N], MathError> {
        let mut acquired = Vec::new();
        acquired.try_reserve_exact(N)?;
        for _ in 0..N {
            acquired.push(BigInt::new()?);
        }

        acquired
            .try_into()
            .map_err(|_: Vec<BigInt>| MathError::OutOfMemory)
    }

    pub fn from_digit(digit: Digit) -> Result<Self, MathError> {
        let mut this = Self::new()?;
        this.set(digit);
        Ok(this)
    }

    pub fn from_u64(value: u64) -> Result<Self, MathError> {
        let mut this = Self::new()?;
        this.digits[0] = (value & DIGIT_MASK) as Digit;
        this.digits[1] = (value >> DIGIT_BIT) as Digit;
        this.used = 2;
        this.normalize();
        Ok(this)
    }

    /// Interprets `bytes` as an unsigned magnitude, most significant byte first
    pub fn from_be_bytes(bytes: &[u8]) -> Result<Self, MathError> {
        let mut this = Self::with_capacity(bytes.len().div_ceil(4))?;
        this.load_be_bytes(bytes)?;
        Ok(this)
    }

    /// Replaces the value with the unsigned big-endian magnitude in `bytes`. On failure the
    /// previous value is left intact
    pub fn load_be_bytes(&mut self, bytes: &[u8]) -> Result<(), MathError> {
        let needed = bytes.len().div_ceil(4).max(2);
        self.grow(needed)?;
        self.zero();

        for (idx, chunk) in bytes.rchunks(4).enumerate() {
            self.digits[idx] = BigEndian::read_uint(chunk, chunk.len()) as Digit;
        }

        self.used = needed;
        self.normalize();
        Ok(())
    }

    /// Ensures at least `size` digits of capacity. Never shrinks. Existing digits are kept
    /// and the new ones are zero
    pub fn grow(&mut self, size: usize) -> Result<(), MathError> {
        if self.digits.len() < size {
            let mut fresh = alloc_zeroed(rounded_capacity(size))?;
            fresh[..self.digits.len()].copy_from_slice(&self.digits);
            self.digits.zeroize();
            self.digits = fresh;
        }

        Ok(())
    }

    /// Sets the value to zero, clearing every digit of the buffer
    pub fn zero(&mut self) {
        self.digits.as_mut_slice().zeroize();
        self.used = 0;
        self.sign = Sign::Positive;
    }

    /// Sets the value to a single digit
    pub fn set(&mut self, digit: Digit) {
        self.zero();
        self.digits[0] = digit;
        self.used = usize::from(digit != 0);
    }

    /// Copies the value of `src` into `self`, growing as required
    pub fn copy_from(&mut self, src: &BigInt) -> Result<(), MathError> {
        self.grow(src.used)?;
        self.digits[..src.used].copy_from_slice(src.digits());
        if self.used > src.used {
            self.digits[src.used..self.used].zeroize();
        }
        self.used = src.used;
        self.sign = src.sign;
        Ok(())
    }

    /// Copies `self` into a fresh buffer sized to its significant digits
    pub fn try_clone(&self) -> Result<Self, MathError> {
        let mut this = Self::with_capacity(self.used)?;
        this.copy_from(self)?;
        Ok(this)
    }

    /// Swaps the digit buffers (and bookkeeping) of two integers
    pub fn exch(&mut self, other: &mut BigInt) {
        std::mem::swap(self, other)
    }

    /// Returns `|self|`
    pub fn abs(&self) -> Result<Self, MathError> {
        let mut this = self.try_clone()?;
        this.sign = Sign::Positive;
        Ok(this)
    }

    /// Returns `-self`
    pub fn neg(&self) -> Result<Self, MathError> {
        let mut this = self.try_clone()?;
        if !this.is_zero() {
            this.sign = this.sign.flip();
        }
        Ok(this)
    }

    pub fn is_zero(&self) -> bool {
        self.used == 0
    }

    pub fn is_even(&self) -> bool {
        self.used == 0 || self.digits[0] & 1 == 0
    }

    pub fn is_odd(&self) -> bool {
        !self.is_even()
    }

    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Negative
    }

    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Number of significant digits
    pub fn used(&self) -> usize {
        self.used
    }

    /// Number of digits the buffer holds before it must grow
    pub fn capacity(&self) -> usize {
        self.digits.len()
    }

    /// The significant digits, least significant first
    pub fn digits(&self) -> &[Digit] {
        &self.digits[..self.used]
    }

    /// Number of bytes needed to hold the magnitude
    pub fn unsigned_bin_size(&self) -> usize {
        self.count_bits().div_ceil(8)
    }

    /// Exports the magnitude, most significant byte first, without leading zero bytes
    pub fn to_be_bytes(&self) -> Vec<u8> {
        let mut out = vec![0u8; self.used * 4];
        for (chunk, digit) in out.chunks_exact_mut(4).zip(self.digits().iter().rev()) {
            BigEndian::write_u32(chunk, *digit);
        }

        let skip = out.len() - self.unsigned_bin_size();
        let _ = out.drain(..skip);
        out
    }

    /// Exports the magnitude left-padded with zeros to exactly `len` bytes
    pub fn to_be_bytes_padded(&self, len: usize) -> Result<Vec<u8>, MathError> {
        let bytes = self.to_be_bytes();
        if bytes.len() > len {
            return Err(MathError::InvalidArgument(
                "value does not fit in the requested byte length",
            ));
        }

        let mut out = vec![0u8; len];
        out[len - bytes.len()..].copy_from_slice(&bytes);
        Ok(out)
    }

    /// Sets bit `bit` of the magnitude
    pub(crate) fn set_bit(&mut self, bit: usize) -> Result<(), MathError> {
        let idx = bit / DIGIT_BIT;
        self.grow(idx + 1)?;
        self.digits[idx] |= 1 << (bit % DIGIT_BIT);
        self.used = self.used.max(idx + 1);
        Ok(())
    }

    /// Tests bit `bit` of the magnitude
    pub fn test_bit(&self, bit: usize) -> bool {
        let idx = bit / DIGIT_BIT;
        idx < self.used && (self.digits[idx] >> (bit % DIGIT_BIT)) & 1 == 1
    }

    fn write_hex(&self, f: &mut Formatter<'_>, upper: bool) -> std::fmt::Result {
        let mut repr = String::with_capacity(self.used * 8 + 1);
        match self.digits().split_last() {
            None => repr.push('0'),
            Some((top, rest)) => {
                if upper {
                    repr.push_str(&format!("{top:X}"));
                    rest.iter()
                        .rev()
                        .for_each(|d| repr.push_str(&format!("{d:08X}")));
                } else {
                    repr.push_str(&format!("{top:x}"));
                    rest.iter()
                        .rev()
                        .for_each(|d| repr.push_str(&format!("{d:08x}")));
                }
            }
        }

        f.pad_integral(!self.is_negative(), "0x", &repr)
    }
}

impl Zeroize for BigInt {
    fn zeroize(&mut self) {
        self.zero()
    }
}

impl Drop for BigInt {
    fn drop(&mut self) {
        self.zeroize()
    }
}

impl ZeroizeOnDrop for BigInt {}

impl LowerHex for BigInt {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.write_hex(f, false)
    }
}

impl UpperHex for BigInt {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.write_hex(f, true)
    }
}

impl Debug for BigInt {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "BigInt({self:#x})")
    }
}
