/// Lexical errors.
///
/// Defines all error types that can occur while the lexer scans source text.
/// Lex errors include unterminated strings and comments, malformed numeric
/// literals, invalid escape sequences, and unrecognized characters.
pub mod lex_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Runtime
/// errors include type misuse, integer overflow, and failed numeric
/// conversions.
pub mod runtime_error;
/// Syntax errors.
///
/// Defines all error types that can occur while the parser consumes the
/// token stream. Syntax errors include unexpected tokens, missing
/// expressions, and invalid assignment targets.
pub mod syntax_error;

pub use lex_error::LexError;
pub use runtime_error::RuntimeError;
pub use syntax_error::SyntaxError;
