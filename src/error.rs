use thiserror::Error;

use crate::radix::Radix;

/// Operations that are part of the surface but deliberately not implemented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Division,
    Remainder,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Division => f.write_str("division"),
            Operation::Remainder => f.write_str("remainder"),
        }
    }
}

/// Error types for parsing, formatting and multiplying [`BigInteger`](crate::BigInteger)s.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BigIntegerError {
    /// No decimal digit where a number was expected
    #[error("malformed integer: expected at least one decimal digit")]
    Malformed,

    /// Text I/O in a radix other than 10
    #[error("unsupported radix: {0}")]
    UnsupportedRadix(Radix),

    /// A read was attempted on a scanner that already failed
    #[error("scanner is in a failed state")]
    StreamFailed,

    /// Declared but unimplemented arithmetic
    #[error("unsupported operation: {0}")]
    Unsupported(Operation),

    /// Operands too large for the number theoretic transform
    #[error("multiplication operand has {limbs} limbs, limit is {limit}")]
    CapacityExceeded { limbs: usize, limit: usize },
}
