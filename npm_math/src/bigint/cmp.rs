use super::{BigInt, Digit, Sign};
use std::cmp::Ordering;

impl BigInt {
    /// Trims high-order zero digits and resets the sign of a zero value
    pub fn normalize(&mut self) {
        while self.used > 0 && self.digits[self.used - 1] == 0 {
            self.used -= 1;
        }

        if self.used == 0 {
            self.sign = Sign::Positive;
        }
    }

    /// Compares magnitudes, ignoring sign
    pub fn cmp_mag(&self, other: &BigInt) -> Ordering {
        self.used.cmp(&other.used).then_with(|| {
            self.digits()
                .iter()
                .rev()
                .cmp(other.digits().iter().rev())
        })
    }

    /// Signed comparison against a single non-negative digit
    pub fn cmp_digit(&self, digit: Digit) -> Ordering {
        if self.is_negative() {
            return Ordering::Less;
        }

        if self.used > 1 {
            return Ordering::Greater;
        }

        self.digits[0].cmp(&digit)
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.sign, other.sign) {
            (Sign::Negative, Sign::Positive) => Ordering::Less,
            (Sign::Positive, Sign::Negative) => Ordering::Greater,
            (Sign::Negative, Sign::Negative) => other.cmp_mag(self),
            (Sign::Positive, Sign::Positive) => self.cmp_mag(other),
        }
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for BigInt {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for BigInt {}
