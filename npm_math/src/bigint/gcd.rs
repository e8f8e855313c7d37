//! Binary (Stein's) greatest common divisor and the least common multiple built on it

use super::{BigInt, Sign};
use crate::misc::MathError;
use std::cmp::Ordering;

impl BigInt {
    /// Returns `gcd(self, rhs)`, always non-negative. `gcd(a, 0) == |a|`
    pub fn gcd(&self, rhs: &BigInt) -> Result<BigInt, MathError> {
        if self.is_zero() {
            return rhs.abs();
        }
        if rhs.is_zero() {
            return self.abs();
        }

        let mut u = self.abs()?;
        let mut v = rhs.abs()?;

        // strip the common power of two, then whatever remains individually
        let u_lsb = u.count_lsb();
        let v_lsb = v.count_lsb();
        let k = u_lsb.min(v_lsb);
        u.shr_bits_assign(u_lsb);
        v.shr_bits_assign(v_lsb);

        while !v.is_zero() {
            if u.cmp_mag(&v) == Ordering::Greater {
                u.exch(&mut v);
            }

            v.sub_mag_assign(&u);
            let lsb = v.count_lsb();
            v.shr_bits_assign(lsb);
        }

        u.shl_bits_assign(k)?;
        u.sign = Sign::Positive;
        Ok(u)
    }

    /// Returns `lcm(self, rhs) = |self * rhs| / gcd(self, rhs)`, computed as the larger operand
    /// divided by the gcd, times the other. The lcm with zero is zero
    pub fn lcm(&self, rhs: &BigInt) -> Result<BigInt, MathError> {
        if self.is_zero() || rhs.is_zero() {
            return BigInt::new();
        }

        let gcd = self.gcd(rhs)?;
        let (larger, other) = if self.cmp_mag(rhs) == Ordering::Less {
            (rhs, self)
        } else {
            (self, rhs)
        };

        let mut lcm = larger.div(&gcd)?.mul(other)?;
        lcm.sign = Sign::Positive;
        Ok(lcm)
    }
}
