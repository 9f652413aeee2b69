use luma::{
    error::LexError,
    interpreter::lexer::{Lexer, TokenKind},
};

fn kinds(source: &str) -> Vec<TokenKind> {
    let mut lexer = Lexer::new(source);
    let mut kinds = Vec::new();

    loop {
        let token = lexer.next_token()
                         .unwrap_or_else(|e| panic!("Lexing failed: {e}"));
        if token.kind == TokenKind::Eof {
            break;
        }
        kinds.push(token.kind);
    }

    kinds
}

fn lex_error(source: &str) -> LexError {
    let mut lexer = Lexer::new(source);

    loop {
        match lexer.next_token() {
            Ok(token) if token.kind == TokenKind::Eof => {
                panic!("Expected a lex error in {source:?}")
            },
            Ok(_) => {},
            Err(e) => return e,
        }
    }
}

#[test]
fn end_of_input_is_idempotent() {
    let mut lexer = Lexer::new("x");

    assert_eq!(lexer.next_token().unwrap().kind,
               TokenKind::Identifier("x".to_string()));

    for _ in 0..4 {
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Eof);
    }
}

#[test]
fn keywords_and_identifiers() {
    assert_eq!(kinds("while whiles _while"),
               vec![TokenKind::While,
                    TokenKind::Identifier("whiles".to_string()),
                    TokenKind::Identifier("_while".to_string())]);

    assert_eq!(kinds("and or not if then elseif else end while do nil print"),
               vec![TokenKind::And,
                    TokenKind::Or,
                    TokenKind::Not,
                    TokenKind::If,
                    TokenKind::Then,
                    TokenKind::Elseif,
                    TokenKind::Else,
                    TokenKind::End,
                    TokenKind::While,
                    TokenKind::Do,
                    TokenKind::Nil,
                    TokenKind::Print]);

    assert_eq!(kinds("true false"),
               vec![TokenKind::Bool(true), TokenKind::Bool(false)]);
}

#[test]
fn numerals() {
    assert_eq!(kinds("16 0x10 0X10"),
               vec![TokenKind::Integer(16), TokenKind::Integer(16), TokenKind::Integer(16)]);
    assert_eq!(kinds("0xff"), vec![TokenKind::Integer(255)]);

    assert_eq!(kinds("12.5 12. 0x1.8"),
               vec![TokenKind::Real(12.5), TokenKind::Real(12.0), TokenKind::Real(1.5)]);
}

#[test]
fn operators_match_greedily() {
    assert_eq!(kinds("... .. . :: := : == = <= < <<"),
               vec![TokenKind::Ellipsis,
                    TokenKind::DotDot,
                    TokenKind::Dot,
                    TokenKind::DoubleColon,
                    TokenKind::Assign,
                    TokenKind::Colon,
                    TokenKind::Equal,
                    TokenKind::Assign,
                    TokenKind::LessEqual,
                    TokenKind::Less,
                    TokenKind::ShiftLeft]);

    assert_eq!(kinds(">= > >> ~= ~ // /"),
               vec![TokenKind::GreaterEqual,
                    TokenKind::Greater,
                    TokenKind::ShiftRight,
                    TokenKind::NotEqual,
                    TokenKind::Tilde,
                    TokenKind::DoubleSlash,
                    TokenKind::Slash]);
}

#[test]
fn positions_track_lines_and_columns() {
    let mut lexer = Lexer::new("x := 1\n  y := 2");

    let x = lexer.next_token().unwrap();
    assert_eq!((x.line, x.column), (1, 1));

    let assign = lexer.next_token().unwrap();
    assert_eq!((assign.line, assign.column), (1, 3));

    let one = lexer.next_token().unwrap();
    assert_eq!((one.line, one.column), (1, 6));

    let y = lexer.next_token().unwrap();
    assert_eq!((y.line, y.column), (2, 3));

    let assign = lexer.next_token().unwrap();
    assert_eq!((assign.line, assign.column), (2, 5));

    let two = lexer.next_token().unwrap();
    assert_eq!((two.line, two.column), (2, 8));
}

#[test]
fn comments_are_skipped() {
    assert_eq!(kinds("1 -- comment\n2"),
               vec![TokenKind::Integer(1), TokenKind::Integer(2)]);

    assert_eq!(kinds("1 --[[ multi\nline --]] 2"),
               vec![TokenKind::Integer(1), TokenKind::Integer(2)]);
}

#[test]
fn block_comments_keep_positions_in_step() {
    let mut lexer = Lexer::new("--[[a\nb--]]x");

    let x = lexer.next_token().unwrap();
    assert_eq!(x.kind, TokenKind::Identifier("x".to_string()));
    assert_eq!((x.line, x.column), (2, 6));
}

#[test]
fn string_literals() {
    assert_eq!(kinds(r#""hello" 'world'"#),
               vec![TokenKind::Str("hello".to_string()),
                    TokenKind::Str("world".to_string())]);

    assert_eq!(kinds(r#""a\n\t\\\"b""#),
               vec![TokenKind::Str("a\n\t\\\"b".to_string())]);
}

#[test]
fn lex_errors() {
    assert!(matches!(lex_error("\"abc"), LexError::UnterminatedString { .. }));
    assert!(matches!(lex_error("'abc\ndef'"), LexError::UnterminatedString { .. }));
    assert!(matches!(lex_error("--[[ never closed"),
                     LexError::UnterminatedComment { .. }));
    assert!(matches!(lex_error("'bad \\q escape'"),
                     LexError::InvalidEscape { escape: 'q', .. }));
    assert!(matches!(lex_error("$"), LexError::UnrecognizedCharacter { .. }));
}

#[test]
fn malformed_numerals() {
    match lex_error("12x") {
        LexError::MalformedNumber { lexeme, .. } => assert_eq!(lexeme, "12x"),
        other => panic!("Expected a malformed number error, got {other:?}"),
    }

    assert!(matches!(lex_error("0x"), LexError::MalformedNumber { .. }));
    assert!(matches!(lex_error("0x10g"), LexError::MalformedNumber { .. }));
    assert!(matches!(lex_error("1.5e3"), LexError::MalformedNumber { .. }));
}
