use std::fmt::{Display, Formatter};

/// Default Error type for this crate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MathError {
    /// A digit buffer could not be grown. The value that was being grown is left untouched
    OutOfMemory,
    /// An input lies outside of the domain accepted by the operation
    InvalidArgument(&'static str),
    /// The divisor (or modulus used as a divisor) was zero
    DivisionByZero,
    /// The value has no multiplicative inverse modulo the given modulus
    NoInverse,
    /// The random byte source delivered fewer bytes than requested
    RandomSourceFailure { requested: usize, produced: usize },
    /// The random prime search hit its configured attempt bound
    AttemptsExhausted(usize),
}

impl MathError {
    pub fn as_str(&self) -> &'static str {
        match self {
            MathError::OutOfMemory => "[MathError] Out of memory",
            MathError::InvalidArgument(_) => "[MathError] Invalid argument",
            MathError::DivisionByZero => "[MathError] Division by zero",
            MathError::NoInverse => "[MathError] No modular inverse exists",
            MathError::RandomSourceFailure { .. } => "[MathError] Random source under-delivered",
            MathError::AttemptsExhausted(_) => "[MathError] Prime search attempts exhausted",
        }
    }
}

impl Display for MathError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MathError::InvalidArgument(reason) => write!(f, "{}: {reason}", self.as_str()),
            MathError::RandomSourceFailure {
                requested,
                produced,
            } => write!(
                f,
                "{} ({produced} of {requested} bytes)",
                self.as_str()
            ),
            MathError::AttemptsExhausted(attempts) => {
                write!(f, "{} after {attempts} candidates", self.as_str())
            }
            _ => f.write_str(self.as_str()),
        }
    }
}

impl std::error::Error for MathError {}

impl From<std::collections::TryReserveError> for MathError {
    fn from(_: std::collections::TryReserveError) -> Self {
        MathError::OutOfMemory
    }
}
