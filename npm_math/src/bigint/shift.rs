//! Digit- and bit-granularity shifts, i.e. multiplication and division by powers of two

use super::{BigInt, Digit, DIGIT_BIT};
use crate::misc::MathError;
use num_integer::Integer;
use zeroize::Zeroize;

impl BigInt {
    /// Shifts left by `count` whole digits (multiplies by radix^count)
    pub fn lshd(&mut self, count: usize) -> Result<(), MathError> {
        if count == 0 || self.is_zero() {
            return Ok(());
        }

        self.grow(self.used + count)?;
        self.digits.copy_within(0..self.used, count);
        self.digits[..count].zeroize();
        self.used += count;
        Ok(())
    }

    /// Shifts right by `count` whole digits (divides by radix^count). Shifting out every
    /// digit leaves zero
    pub fn rshd(&mut self, count: usize) {
        if count == 0 {
            return;
        }

        if self.used <= count {
            self.zero();
            return;
        }

        let remaining = self.used - count;
        self.digits.copy_within(count..self.used, 0);
        self.digits[remaining..self.used].zeroize();
        self.used = remaining;
    }

    /// In-place `self <<= bits`
    pub fn shl_bits_assign(&mut self, bits: usize) -> Result<(), MathError> {
        let (whole, part) = bits.div_rem(&DIGIT_BIT);
        // room for the digit shift plus one carried-out digit
        self.grow(self.used + whole + 1)?;
        self.lshd(whole)?;

        if part != 0 {
            let shift = DIGIT_BIT - part;
            let mut carry: Digit = 0;
            for digit in &mut self.digits[..self.used] {
                let next = *digit >> shift;
                *digit = (*digit << part) | carry;
                carry = next;
            }

            if carry != 0 {
                self.digits[self.used] = carry;
                self.used += 1;
            }
        }

        self.normalize();
        Ok(())
    }

    /// In-place `self >>= bits` on the magnitude (truncates toward zero)
    pub fn shr_bits_assign(&mut self, bits: usize) {
        let (whole, part) = bits.div_rem(&DIGIT_BIT);
        self.rshd(whole);

        if part != 0 {
            let mask: Digit = (1 << part) - 1;
            let shift = DIGIT_BIT - part;
            let mut carry: Digit = 0;
            for digit in self.digits[..self.used].iter_mut().rev() {
                let low = *digit & mask;
                *digit = (*digit >> part) | (carry << shift);
                carry = low;
            }
        }

        self.normalize();
    }

    /// In-place `self = self mod 2^bits`, keeping the sign
    pub fn mod_2d_assign(&mut self, bits: usize) {
        if bits == 0 {
            self.zero();
            return;
        }

        if bits >= self.used * DIGIT_BIT {
            return;
        }

        let (whole, part) = bits.div_rem(&DIGIT_BIT);
        let first_cleared = whole + usize::from(part != 0);
        self.digits[first_cleared..self.used].zeroize();
        if part != 0 {
            self.digits[whole] &= (1 << part) - 1;
        }

        self.normalize();
    }

    /// Returns `self * 2^bits`
    pub fn mul_2d(&self, bits: usize) -> Result<BigInt, MathError> {
        let mut out = self.try_clone()?;
        out.shl_bits_assign(bits)?;
        Ok(out)
    }

    /// Returns `(self / 2^bits, self mod 2^bits)`. Both results carry the sign of `self`
    pub fn div_2d(&self, bits: usize) -> Result<(BigInt, BigInt), MathError> {
        let mut quotient = self.try_clone()?;
        let mut remainder = self.try_clone()?;
        remainder.mod_2d_assign(bits);
        quotient.shr_bits_assign(bits);
        Ok((quotient, remainder))
    }

    /// Returns `self mod 2^bits`
    pub fn mod_2d(&self, bits: usize) -> Result<BigInt, MathError> {
        let mut out = self.try_clone()?;
        out.mod_2d_assign(bits);
        Ok(out)
    }

    /// Returns `self / 2`
    pub fn div_2(&self) -> Result<BigInt, MathError> {
        let mut out = self.try_clone()?;
        out.div_2_assign();
        Ok(out)
    }

    pub fn div_2_assign(&mut self) {
        self.shr_bits_assign(1)
    }

    /// Number of bits in the magnitude
    pub fn count_bits(&self) -> usize {
        match self.digits().last() {
            None => 0,
            Some(top) => (self.used - 1) * DIGIT_BIT + (DIGIT_BIT - top.leading_zeros() as usize),
        }
    }

    /// Number of trailing zero bits of the magnitude. Zero for a zero value
    pub fn count_lsb(&self) -> usize {
        self.digits()
            .iter()
            .position(|digit| *digit != 0)
            .map(|idx| idx * DIGIT_BIT + self.digits[idx].trailing_zeros() as usize)
            .unwrap_or(0)
    }
}
