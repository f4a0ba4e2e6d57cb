//! Edge case tests for toka-lex

use crate::{Keyword, LexError, Lexer, Symbol, Token};
use toka_util::Handler;

/// Lexes until end of input or the first error.
fn lex_until_error(source: &str) -> (Vec<Token>, Option<LexError>) {
    let handler = Handler::new();
    let mut lexer = Lexer::from_text(source, &handler);
    let mut tokens = Vec::new();
    loop {
        match lexer.next_token() {
            Ok(Some(token)) => tokens.push(token),
            Ok(None) => return (tokens, None),
            Err(e) => return (tokens, Some(e)),
        }
    }
}

fn lex_all(source: &str) -> Vec<Token> {
    let (tokens, error) = lex_until_error(source);
    assert!(error.is_none(), "unexpected error: {:?}", error);
    tokens
}

// ==================== EDGE CASES ====================

#[test]
fn test_edge_empty_source() {
    assert!(lex_all("").is_empty());
}

#[test]
fn test_edge_single_char_ident() {
    assert_eq!(lex_all("x"), vec![Token::Ident("x".into())]);
}

#[test]
fn test_edge_long_identifier_in_statement() {
    let name = "a".repeat(10_000);
    let t = lex_all(&format!("{} = 1;", name));
    assert_eq!(t[0], Token::Ident(name));
    assert_eq!(t.len(), 4);
}

#[test]
fn test_edge_leading_zeros() {
    assert_eq!(lex_all("007"), vec![Token::Number("007".into())]);
}

#[test]
fn test_edge_nul_is_an_error() {
    let (tokens, error) = lex_until_error("x\0y");
    assert_eq!(tokens, vec![Token::Ident("x".into())]);
    assert!(matches!(error, Some(LexError::UnexpectedChar { ch: '\0', .. })));
}

#[test]
fn test_edge_double_ampersand() {
    let (tokens, error) = lex_until_error("x&&");
    assert_eq!(tokens.len(), 1);
    let span = error.and_then(|e| e.span()).unwrap();
    assert_eq!((span.line, span.column), (1, 2));
}

#[test]
fn test_edge_error_at_start() {
    let (tokens, error) = lex_until_error("@if");
    assert!(tokens.is_empty());
    assert!(error.unwrap().is_lexical());
}

#[test]
fn test_edge_nested_parens() {
    let t = lex_all("((((x))))");
    assert_eq!(t.len(), 9);
    assert_eq!(t[4], Token::Ident("x".into()));
    assert!(t[..4].iter().all(|t| *t == Token::Symbol(Symbol::LPar)));
    assert!(t[5..].iter().all(|t| *t == Token::Symbol(Symbol::RPar)));
}

#[test]
fn test_edge_case_sensitive_keywords() {
    assert_eq!(lex_all("If"), vec![Token::Ident("If".into())]);
    assert_eq!(lex_all("WHILE"), vec![Token::Ident("WHILE".into())]);
}

#[test]
fn test_edge_keywords_adjacent_to_symbols() {
    assert_eq!(
        lex_all("else{break;}"),
        vec![
            Token::Keyword(Keyword::Else),
            Token::Symbol(Symbol::LBrace),
            Token::Keyword(Keyword::Break),
            Token::Symbol(Symbol::Semicolon),
            Token::Symbol(Symbol::RBrace),
        ]
    );
}

#[test]
fn test_edge_equals_at_end_of_input() {
    assert_eq!(
        lex_all("x ="),
        vec![Token::Ident("x".into()), Token::Symbol(Symbol::Assign)]
    );
}

#[test]
fn test_edge_equals_then_error() {
    let (tokens, error) = lex_until_error("=&");
    assert_eq!(tokens, vec![Token::Symbol(Symbol::Assign)]);
    assert!(error.is_some());
}

#[test]
fn test_edge_trailing_whitespace() {
    assert_eq!(lex_all("x \n\t "), vec![Token::Ident("x".into())]);
}

#[test]
fn test_edge_slash_is_not_a_comment() {
    assert_eq!(
        lex_all("//"),
        vec![Token::Symbol(Symbol::Div), Token::Symbol(Symbol::Div)]
    );
}

#[test]
fn test_edge_unicode_whitespace() {
    // U+00A0 and U+2003 are whitespace to `char::is_whitespace`.
    assert_eq!(
        lex_all("a\u{00A0}b\u{2003}c"),
        vec![
            Token::Ident("a".into()),
            Token::Ident("b".into()),
            Token::Ident("c".into()),
        ]
    );
}

#[test]
fn test_edge_error_is_final() {
    let handler = Handler::new();
    let mut lexer = Lexer::from_text("# x y z", &handler);
    assert!(lexer.next_token().is_err());
    for _ in 0..3 {
        assert_eq!(lexer.next_token().unwrap(), None);
    }
    assert_eq!(handler.error_count(), 1);
}

#[test]
fn test_edge_non_ascii_digit_ends_identifier() {
    for (source, ch) in [("x²", '²'), ("x٣", '٣'), ("a½", '½')] {
        let (tokens, error) = lex_until_error(source);
        assert_eq!(tokens, vec![Token::Ident(source[..1].to_string())]);
        assert!(
            matches!(error, Some(LexError::UnexpectedChar { ch: c, .. }) if c == ch),
            "{source:?}"
        );
    }
}
