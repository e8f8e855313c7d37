use super::BigInt;
use crate::misc::MathError;

impl BigInt {
    /// Returns `self^exponent mod modulus` by left-to-right square-and-multiply.
    ///
    /// A negative exponent first inverts `self` modulo `modulus`, failing with
    /// [`MathError::NoInverse`] when that inverse does not exist.
    pub fn exptmod(&self, exponent: &BigInt, modulus: &BigInt) -> Result<BigInt, MathError> {
        if modulus.is_negative() || modulus.is_zero() {
            return Err(MathError::InvalidArgument("modulus must be positive"));
        }

        if exponent.is_negative() {
            let inverse = self.invmod(modulus)?;
            return inverse.exptmod(&exponent.abs()?, modulus);
        }

        let base = self.modulo(modulus)?;
        // reduced so that a modulus of one yields zero
        let mut result = BigInt::from_digit(1)?.modulo(modulus)?;

        for bit in (0..exponent.count_bits()).rev() {
            result = result.sqrmod(modulus)?;
            if exponent.test_bit(bit) {
                result = result.mulmod(&base, modulus)?;
            }
        }

        Ok(result)
    }
}
