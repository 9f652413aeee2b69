#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// A value had an unexpected or incompatible type.
    TypeError {
        /// Details about the type mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A numeric value was expected, but not found.
    ExpectedNumber {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Arithmetic operation overflowed.
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A value was too large to be represented safely.
    LiteralTooLarge {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A value was too small to be represented safely.
    LiteralTooSmall {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TypeError { details, line } => {
                write!(f, "Error on line {line}: Type error: {details}.")
            },

            Self::ExpectedNumber { line } => write!(f, "Error on line {line}: Expected number."),

            Self::Overflow { line } => write!(f,
                                              "Error on line {line}: Integer overflow while trying to compute result."),

            Self::LiteralTooLarge { line } => {
                write!(f, "Error on line {line}: Value is too large.")
            },

            Self::LiteralTooSmall { line } => {
                write!(f, "Error on line {line}: Value is too small.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
