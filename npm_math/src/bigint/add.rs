//! Magnitude addition/subtraction with carry propagation, and the signed wrappers over them

use super::{BigInt, Digit, Word, DIGIT_BIT, DIGIT_MASK};
use crate::misc::MathError;
use std::cmp::Ordering;

impl BigInt {
    /// `|self| = |self| + |rhs|`. The sign is left untouched
    pub(crate) fn add_mag_assign(&mut self, rhs: &BigInt) -> Result<(), MathError> {
        let max = self.used.max(rhs.used);
        self.grow(max + 1)?;

        let mut carry: Word = 0;
        for idx in 0..max {
            // digits above `used` are always zero
            let addend = rhs.digits.get(idx).copied().unwrap_or(0);
            let sum = self.digits[idx] as Word + addend as Word + carry;
            self.digits[idx] = (sum & DIGIT_MASK) as Digit;
            carry = sum >> DIGIT_BIT;
        }

        self.digits[max] = carry as Digit;
        self.used = max + 1;
        self.normalize();
        Ok(())
    }

    /// `|self| = |self| - |rhs|`, requires `|self| >= |rhs|`. The sign is left untouched
    pub(crate) fn sub_mag_assign(&mut self, rhs: &BigInt) {
        debug_assert_ne!(self.cmp_mag(rhs), Ordering::Less);

        let mut borrow = false;
        for idx in 0..self.used {
            if idx >= rhs.used && !borrow {
                break;
            }

            let subtrahend = if idx < rhs.used { rhs.digits[idx] } else { 0 };
            let (diff, under_a) = self.digits[idx].overflowing_sub(subtrahend);
            let (diff, under_b) = diff.overflowing_sub(Digit::from(borrow));
            self.digits[idx] = diff;
            borrow = under_a || under_b;
        }

        self.normalize();
    }

    /// `|self| = |rhs| - |self|`, requires `|rhs| > |self|`. The sign is left untouched
    pub(crate) fn rsub_mag_assign(&mut self, rhs: &BigInt) -> Result<(), MathError> {
        debug_assert_eq!(self.cmp_mag(rhs), Ordering::Less);
        self.grow(rhs.used)?;

        let mut borrow = false;
        for idx in 0..rhs.used {
            let (diff, under_a) = rhs.digits[idx].overflowing_sub(self.digits[idx]);
            let (diff, under_b) = diff.overflowing_sub(Digit::from(borrow));
            self.digits[idx] = diff;
            borrow = under_a || under_b;
        }

        self.used = rhs.used;
        self.normalize();
        Ok(())
    }

    /// In-place signed `self += rhs`
    pub fn add_assign(&mut self, rhs: &BigInt) -> Result<(), MathError> {
        if self.sign == rhs.sign {
            return self.add_mag_assign(rhs);
        }

        // differing signs: the larger magnitude decides the sign
        if self.cmp_mag(rhs) == Ordering::Less {
            self.rsub_mag_assign(rhs)?;
            self.sign = rhs.sign;
        } else {
            self.sub_mag_assign(rhs);
        }

        Ok(())
    }

    /// In-place signed `self -= rhs`
    pub fn sub_assign(&mut self, rhs: &BigInt) -> Result<(), MathError> {
        if self.sign != rhs.sign {
            return self.add_mag_assign(rhs);
        }

        if self.cmp_mag(rhs) == Ordering::Less {
            self.rsub_mag_assign(rhs)?;
            self.sign = self.sign.flip();
        } else {
            self.sub_mag_assign(rhs);
        }

        Ok(())
    }

    /// Returns `self + rhs`
    pub fn add(&self, rhs: &BigInt) -> Result<BigInt, MathError> {
        let mut out = self.try_clone()?;
        out.add_assign(rhs)?;
        Ok(out)
    }

    /// Returns `self - rhs`
    pub fn sub(&self, rhs: &BigInt) -> Result<BigInt, MathError> {
        let mut out = self.try_clone()?;
        out.sub_assign(rhs)?;
        Ok(out)
    }

    /// Returns `self + digit`
    pub fn add_digit(&self, digit: Digit) -> Result<BigInt, MathError> {
        self.add(&BigInt::from_digit(digit)?)
    }

    /// Returns `self - digit`
    pub fn sub_digit(&self, digit: Digit) -> Result<BigInt, MathError> {
        self.sub(&BigInt::from_digit(digit)?)
    }
}
