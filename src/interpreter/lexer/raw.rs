use logos::{FilterResult, Logos, Skip};

/// Error kinds produced while scanning, before they are attached to a source
/// position by the lexer wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RawLexError {
    /// A character that does not begin any token.
    #[default]
    UnrecognizedCharacter,
    /// A string literal ran into a newline or the end of input.
    UnterminatedString,
    /// A block comment ran into the end of input.
    UnterminatedComment,
    /// A numeric literal that cannot be scanned as a number.
    MalformedNumber,
    /// An unknown backslash escape inside a string literal.
    InvalidEscape(char),
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number and the byte offset at which the current
/// line starts, so that tokens can report a line and column for diagnostics.
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line:       usize,
    /// Byte offset of the first character of the current line.
    pub line_start: usize,
}

/// Represents a raw lexical token scanned by logos.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines every recognized lexeme, including the operator
/// spellings the grammar itself never uses; whitespace and comments are
/// skipped here and never surface.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
#[logos(error = RawLexError)]
#[logos(skip r"[ \t\r\f\x0B]+")]
pub enum RawToken {
    /// Integer literal tokens, decimal (`42`) or hexadecimal (`0x2a`).
    #[regex(r"[0-9]+", lex_integer)]
    #[regex(r"0[xX][0-9a-fA-F]+", lex_hex_integer, priority = 12)]
    #[regex(r"[0-9]+\.?[0-9]*[a-zA-Z_][0-9a-zA-Z_]*", lex_malformed_number, priority = 8)]
    Integer(i64),
    /// Real literal tokens, decimal (`3.14`, `12.`) or hex-float (`0x1.8`).
    #[regex(r"[0-9]+\.[0-9]*", lex_real)]
    #[regex(r"0[xX][0-9a-fA-F]+\.[0-9a-fA-F]*", lex_hex_real, priority = 12)]
    Real(f64),
    /// String literal tokens, single- or double-quoted, with escapes decoded.
    #[token("\"", lex_double_quoted)]
    #[token("'", lex_single_quoted)]
    Str(String),
    /// Boolean literal tokens, `true` or `false`.
    #[token("true", lex_bool)]
    #[token("false", lex_bool)]
    Bool(bool),
    /// `and`
    #[token("and")]
    And,
    /// `or`
    #[token("or")]
    Or,
    /// `not`
    #[token("not")]
    Not,
    /// `if`
    #[token("if")]
    If,
    /// `then`
    #[token("then")]
    Then,
    /// `elseif`
    #[token("elseif")]
    Elseif,
    /// `else`
    #[token("else")]
    Else,
    /// `end`
    #[token("end")]
    End,
    /// `while`
    #[token("while")]
    While,
    /// `do`
    #[token("do")]
    Do,
    /// `nil`
    #[token("nil")]
    Nil,
    /// `print`
    #[token("print")]
    Print,
    /// Identifier tokens; variable names such as `x` or `counter`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", lex_identifier)]
    Identifier(String),
    /// `...`
    #[token("...")]
    Ellipsis,
    /// `==`
    #[token("==")]
    Equal,
    /// `~=`
    #[token("~=")]
    NotEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `::`
    #[token("::")]
    DoubleColon,
    /// `..`
    #[token("..")]
    DotDot,
    /// `//`
    #[token("//")]
    DoubleSlash,
    /// `<<`
    #[token("<<")]
    ShiftLeft,
    /// `>>`
    #[token(">>")]
    ShiftRight,
    /// The assignment token, written `:=` or `=`.
    #[token(":=")]
    #[token("=")]
    Assign,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `^`
    #[token("^")]
    Caret,
    /// `#`
    #[token("#")]
    Hash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `:`
    #[token(":")]
    Colon,
    /// `,`
    #[token(",")]
    Comma,
    /// `.`
    #[token(".")]
    Dot,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `&`
    #[token("&")]
    Ampersand,
    /// `|`
    #[token("|")]
    Pipe,
    /// `~`
    #[token("~")]
    Tilde,
    /// `-- Comments.` and `--[[ block comments --]]`; always skipped.
    #[token("--", lex_comment)]
    Comment,
    /// Line breaks; skipped after updating the position counters.
    #[token("\n", lex_newline)]
    Newline,
}

/// Parses a decimal integer literal from the current token slice.
fn lex_integer(lex: &logos::Lexer<RawToken>) -> Result<i64, RawLexError> {
    lex.slice().parse().map_err(|_| RawLexError::MalformedNumber)
}

/// Parses a hexadecimal integer literal (leading `0x`/`0X`) from the current
/// token slice.
fn lex_hex_integer(lex: &logos::Lexer<RawToken>) -> Result<i64, RawLexError> {
    i64::from_str_radix(&lex.slice()[2..], 16).map_err(|_| RawLexError::MalformedNumber)
}

/// Parses a decimal real literal from the current token slice.
fn lex_real(lex: &logos::Lexer<RawToken>) -> Result<f64, RawLexError> {
    lex.slice().parse().map_err(|_| RawLexError::MalformedNumber)
}

/// Parses a hexadecimal real literal such as `0x1.8` (= 1.5).
///
/// The value is the hex integer part plus the fractional hex digits scaled
/// by successive powers of 1/16. The regex guarantees every byte is a hex
/// digit, so digit decoding cannot fail.
fn lex_hex_real(lex: &logos::Lexer<RawToken>) -> f64 {
    let digits = &lex.slice()[2..];
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits, ""));

    let mut value = 0.0_f64;
    for digit in int_part.chars() {
        value = value * 16.0 + f64::from(digit.to_digit(16).unwrap_or(0));
    }

    let mut scale = 1.0 / 16.0;
    for digit in frac_part.chars() {
        value += f64::from(digit.to_digit(16).unwrap_or(0)) * scale;
        scale /= 16.0;
    }

    value
}

/// Rejects a numeral with a trailing alphabetic character, such as `12x`.
fn lex_malformed_number(_lex: &logos::Lexer<RawToken>) -> Result<i64, RawLexError> {
    Err(RawLexError::MalformedNumber)
}

/// Parses a boolean literal from the current token slice.
fn lex_bool(lex: &logos::Lexer<RawToken>) -> bool {
    lex.slice() == "true"
}

/// Copies an identifier out of the current token slice.
fn lex_identifier(lex: &logos::Lexer<RawToken>) -> String {
    lex.slice().to_string()
}

/// Scans a double-quoted string literal body.
fn lex_double_quoted(lex: &mut logos::Lexer<RawToken>) -> Result<String, RawLexError> {
    lex_quoted(lex, '"')
}

/// Scans a single-quoted string literal body.
fn lex_single_quoted(lex: &mut logos::Lexer<RawToken>) -> Result<String, RawLexError> {
    lex_quoted(lex, '\'')
}

/// Scans a string literal body up to the closing quote, decoding escapes.
///
/// Called after the opening quote has been matched. The literal may not span
/// lines; reaching a newline or the end of input before the closing quote is
/// an unterminated-string error. Recognized escapes are `\n`, `\t`, `\r`,
/// `\b`, `\f`, `\\`, `\'` and `\"`.
fn lex_quoted(lex: &mut logos::Lexer<RawToken>, quote: char) -> Result<String, RawLexError> {
    let mut decoded = String::new();
    let mut chars = lex.remainder().char_indices();

    while let Some((offset, c)) = chars.next() {
        if c == quote {
            lex.bump(offset + c.len_utf8());
            return Ok(decoded);
        }

        match c {
            '\\' => match chars.next() {
                Some((_, escape)) => decoded.push(match escape {
                    'n' => '\n',
                    't' => '\t',
                    'r' => '\r',
                    'b' => '\u{0008}',
                    'f' => '\u{000C}',
                    '\\' => '\\',
                    '\'' => '\'',
                    '"' => '"',
                    other => return Err(RawLexError::InvalidEscape(other)),
                }),
                None => return Err(RawLexError::UnterminatedString),
            },
            '\n' => return Err(RawLexError::UnterminatedString),
            _ => decoded.push(c),
        }
    }

    Err(RawLexError::UnterminatedString)
}

/// Skips a comment, which starts at `--`.
///
/// When the marker is followed by `[[` the comment is a block comment and
/// runs to the closing `--]]`, possibly over several lines; the position
/// counters are kept in step with any newlines inside it. Otherwise the
/// comment runs to the end of the line. A block comment with no closing
/// marker is an unterminated-comment error.
fn lex_comment(lex: &mut logos::Lexer<RawToken>) -> FilterResult<(), RawLexError> {
    let rest = lex.remainder();

    if rest.starts_with("[[") {
        let Some(close) = rest.find("--]]") else {
            return FilterResult::Error(RawLexError::UnterminatedComment);
        };

        let consumed = close + 4;
        let skipped = &rest[..consumed];
        if let Some(last_newline) = skipped.rfind('\n') {
            lex.extras.line += skipped.matches('\n').count();
            lex.extras.line_start = lex.span().end + last_newline + 1;
        }

        lex.bump(consumed);
        FilterResult::Skip
    } else {
        let end = rest.find('\n').unwrap_or(rest.len());
        lex.bump(end);
        FilterResult::Skip
    }
}

/// Skips a line break and advances the position counters.
fn lex_newline(lex: &mut logos::Lexer<RawToken>) -> Skip {
    lex.extras.line += 1;
    lex.extras.line_start = lex.span().end;
    Skip
}
