//! Modular inverse by the extended binary GCD (HAC 14.61)

use super::BigInt;
use crate::misc::MathError;
use std::cmp::Ordering;

impl BigInt {
    /// Returns `c` in `[0, modulus)` with `self * c == 1 (mod modulus)`.
    ///
    /// Fails with [`MathError::InvalidArgument`] if `modulus <= 1` and with
    /// [`MathError::NoInverse`] when `gcd(self, modulus) != 1`.
    pub fn invmod(&self, modulus: &BigInt) -> Result<BigInt, MathError> {
        if modulus.cmp_digit(1) != Ordering::Greater {
            log::debug!(target: "npm", "invmod rejected a modulus <= 1");
            return Err(MathError::InvalidArgument("modulus must be greater than one"));
        }

        let x = self.modulo(modulus)?;
        let y = modulus.try_clone()?;

        // both even means 2 divides the gcd. A zero residue has gcd == modulus > 1
        if (x.is_even() && y.is_even()) || x.is_zero() {
            return Err(MathError::NoInverse);
        }

        let mut u = x.try_clone()?;
        let mut v = y.try_clone()?;
        let [mut a, mut b, mut c, mut d] = BigInt::init_multi()?;
        a.set(1);
        d.set(1);

        // invariants: a*x + b*y == u and c*x + d*y == v
        loop {
            while u.is_even() {
                u.div_2_assign();
                if a.is_odd() || b.is_odd() {
                    a.add_assign(&y)?;
                    b.sub_assign(&x)?;
                }
                a.div_2_assign();
                b.div_2_assign();
            }

            while v.is_even() {
                v.div_2_assign();
                if c.is_odd() || d.is_odd() {
                    c.add_assign(&y)?;
                    d.sub_assign(&x)?;
                }
                c.div_2_assign();
                d.div_2_assign();
            }

            if u.cmp(&v) != Ordering::Less {
                u.sub_assign(&v)?;
                a.sub_assign(&c)?;
                b.sub_assign(&d)?;
            } else {
                v.sub_assign(&u)?;
                c.sub_assign(&a)?;
                d.sub_assign(&b)?;
            }

            if u.is_zero() {
                break;
            }
        }

        if v.cmp_digit(1) != Ordering::Equal {
            return Err(MathError::NoInverse);
        }

        c.modulo(modulus)
    }
}
