use std::mem;

use crate::{
    ast::Program,
    error::SyntaxError,
    interpreter::lexer::{Lexer, Token, TokenKind},
};

/// Result type used by the parser.
///
/// All parsing functions return either a value of type `T` or a
/// [`SyntaxError`] describing the failure.
pub type ParseResult<T> = Result<T, SyntaxError>;

/// A recursive-descent parser over the lexer's token stream.
///
/// The parser owns its lexer and pulls tokens on demand, holding exactly one
/// token of lookahead in `current`; the token stream is never materialized.
/// Every grammar rule consumes tokens through [`eat`](Self::eat) (verify and
/// advance) or [`bump`](Self::bump) (advance unconditionally), so an
/// unexpected token at any production fails the whole parse. No recovery is
/// attempted and no partial AST is returned.
///
/// # Example
/// ```
/// use luma::interpreter::parser::core::Parser;
///
/// let parser = Parser::new("x := 1 + 2").unwrap();
/// let program = parser.parse().unwrap();
///
/// assert_eq!(program.block.statements.len(), 1);
/// ```
pub struct Parser<'src> {
    pub(in crate::interpreter::parser) lexer:   Lexer<'src>,
    pub(in crate::interpreter::parser) current: Token,
}

impl<'src> Parser<'src> {
    /// Creates a parser over the given source text and pulls the first
    /// token.
    ///
    /// # Errors
    /// Returns a [`SyntaxError::Lex`] if the very first token cannot be
    /// scanned.
    pub fn new(source: &'src str) -> ParseResult<Self> {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token()?;
        Ok(Self { lexer, current })
    }

    /// Parses a complete program.
    ///
    /// Grammar: `program := block <eof>`
    ///
    /// The whole input must be consumed; a token left over after the
    /// top-level block is a syntax error.
    ///
    /// # Errors
    /// Returns a [`SyntaxError`] for any lexical or grammatical failure.
    pub fn parse(mut self) -> ParseResult<Program> {
        let block = self.block()?;
        self.eat(&TokenKind::Eof)?;
        Ok(Program { block })
    }

    /// Advances to the next token unconditionally and returns the token
    /// that was current before the call.
    ///
    /// # Errors
    /// Returns a [`SyntaxError::Lex`] if the next token cannot be scanned.
    pub(in crate::interpreter::parser) fn bump(&mut self) -> ParseResult<Token> {
        let next = self.lexer.next_token()?;
        Ok(mem::replace(&mut self.current, next))
    }

    /// Verifies that the current token has the expected kind, then advances
    /// and returns the eaten token.
    ///
    /// Kinds are compared by variant only, so payload-carrying kinds can be
    /// expected with any payload.
    ///
    /// # Errors
    /// Returns [`SyntaxError::UnexpectedToken`] when the current token does
    /// not match.
    pub(in crate::interpreter::parser) fn eat(&mut self, expected: &TokenKind) -> ParseResult<Token> {
        if mem::discriminant(&self.current.kind) == mem::discriminant(expected) {
            self.bump()
        } else {
            Err(SyntaxError::UnexpectedToken { expected: format!("'{expected}'"),
                                               found:    format!("'{}'", self.current.kind),
                                               line:     self.current.line,
                                               column:   self.current.column, })
        }
    }
}
