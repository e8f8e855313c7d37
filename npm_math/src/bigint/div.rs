//! Restoring (bit-by-bit) long division and the remainder operations derived from it

use super::{BigInt, Digit, Sign, Word, DIGIT_BIT, DIGIT_MASK};
use crate::misc::MathError;
use std::cmp::Ordering;

impl BigInt {
    /// Returns `(quotient, remainder)` with the quotient truncated toward zero. The quotient is
    /// positive iff the operand signs match; the remainder takes the sign of `self`
    pub fn div_rem(&self, rhs: &BigInt) -> Result<(BigInt, BigInt), MathError> {
        if rhs.is_zero() {
            return Err(MathError::DivisionByZero);
        }

        if self.cmp_mag(rhs) == Ordering::Less {
            return Ok((BigInt::new()?, self.try_clone()?));
        }

        let shift = self.count_bits() - rhs.count_bits();
        let mut remainder = self.abs()?;
        let mut divisor = rhs.mul_2d(shift)?;
        divisor.sign = Sign::Positive;
        let mut quotient = BigInt::with_capacity(shift / DIGIT_BIT + 1)?;

        for bit in (0..=shift).rev() {
            if divisor.cmp_mag(&remainder) != Ordering::Greater {
                remainder.sub_mag_assign(&divisor);
                quotient.set_bit(bit)?;
            }
            divisor.shr_bits_assign(1);
        }

        quotient.sign = if self.sign == rhs.sign {
            Sign::Positive
        } else {
            Sign::Negative
        };
        quotient.normalize();

        remainder.sign = self.sign;
        remainder.normalize();

        Ok((quotient, remainder))
    }

    /// Returns the truncated quotient `self / rhs`
    pub fn div(&self, rhs: &BigInt) -> Result<BigInt, MathError> {
        self.div_rem(rhs).map(|(quotient, _)| quotient)
    }

    /// Returns `self mod modulus`, taking the sign of `modulus` with magnitude below `|modulus|`
    pub fn modulo(&self, modulus: &BigInt) -> Result<BigInt, MathError> {
        let (_, mut remainder) = self.div_rem(modulus)?;
        if !remainder.is_zero() && remainder.sign != modulus.sign {
            remainder.add_assign(modulus)?;
        }

        Ok(remainder)
    }

    /// Returns `|self| mod digit`
    pub fn mod_digit(&self, digit: Digit) -> Result<Digit, MathError> {
        if digit == 0 {
            return Err(MathError::DivisionByZero);
        }

        let divisor = digit as Word;
        let remainder = self.digits().iter().rev().fold(0, |acc: Word, d| {
            ((acc << DIGIT_BIT) | *d as Word) % divisor
        });

        Ok((remainder & DIGIT_MASK) as Digit)
    }

    /// Returns `self * rhs mod modulus`
    pub fn mulmod(&self, rhs: &BigInt, modulus: &BigInt) -> Result<BigInt, MathError> {
        self.mul(rhs)?.modulo(modulus)
    }

    /// Returns `self * self mod modulus`
    pub fn sqrmod(&self, modulus: &BigInt) -> Result<BigInt, MathError> {
        self.sqr()?.modulo(modulus)
    }
}
