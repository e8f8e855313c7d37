use super::{BigInt, Digit, Sign, Word, DIGIT_BIT, DIGIT_MASK};
use crate::misc::MathError;

impl BigInt {
    /// Returns `self * rhs` using schoolbook multiplication
    pub fn mul(&self, rhs: &BigInt) -> Result<BigInt, MathError> {
        let width = self.used + rhs.used;
        let mut out = BigInt::with_capacity(width)?;

        for (i, &a) in self.digits().iter().enumerate() {
            let mut carry: Word = 0;
            for (j, &b) in rhs.digits().iter().enumerate() {
                // (2^32 - 1) + (2^32 - 1)^2 + (2^32 - 1) == 2^64 - 1, so this never overflows
                let acc = out.digits[i + j] as Word + (a as Word) * (b as Word) + carry;
                out.digits[i + j] = (acc & DIGIT_MASK) as Digit;
                carry = acc >> DIGIT_BIT;
            }
            out.digits[i + rhs.used] = carry as Digit;
        }

        out.used = width;
        out.sign = if self.sign == rhs.sign {
            Sign::Positive
        } else {
            Sign::Negative
        };
        out.normalize();
        Ok(out)
    }

    /// Returns `self * self`
    pub fn sqr(&self) -> Result<BigInt, MathError> {
        self.mul(self)
    }
}
