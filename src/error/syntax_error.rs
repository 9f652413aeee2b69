use crate::error::LexError;

#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur while parsing the token stream.
pub enum SyntaxError {
    /// The lexer failed while the parser was pulling the next token.
    Lex(LexError),
    /// The current token did not match the token the grammar expects.
    UnexpectedToken {
        /// Rendering of the expected token.
        expected: String,
        /// Rendering of the token that was actually found.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
        /// The source column where the error occurred.
        column:   usize,
    },
    /// An expression was expected but the current token cannot begin one.
    ExpectedExpression {
        /// Rendering of the token that was actually found.
        found:  String,
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// The left-hand side of an assignment was not a plain variable.
    InvalidAssignmentTarget {
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(error) => write!(f, "{error}"),

            Self::UnexpectedToken { expected, found, line, column } => {
                write!(f, "Error on line {line}, column {column}: Expected {expected}, found {found}.")
            },

            Self::ExpectedExpression { found, line, column } => {
                write!(f, "Error on line {line}, column {column}: Expected an expression, found {found}.")
            },

            Self::InvalidAssignmentTarget { line, column } => {
                write!(f, "Error on line {line}, column {column}: Only a variable can be assigned to.")
            },
        }
    }
}

impl std::error::Error for SyntaxError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(error) => Some(error),
            _ => None,
        }
    }
}

impl From<LexError> for SyntaxError {
    fn from(error: LexError) -> Self {
        Self::Lex(error)
    }
}
