//! Identifier and keyword lexing.
//!
//! This module handles lexing of identifiers and keywords.

use std::io::Read;

use crate::error::LexResult;
use crate::token::Token;
use crate::unicode::is_ident_continue;
use crate::Lexer;

impl<'a, R: Read> Lexer<'a, R> {
    /// Lexes an identifier or keyword whose first character is `first`.
    ///
    /// Consumes identifier characters greedily and pushes back the first
    /// character that does not belong. The accumulated text is then checked
    /// against the recognition table, so keywords take precedence over
    /// identifiers but only on an exact match (`ifx` is an identifier).
    pub(super) fn lex_identifier(&mut self, first: char) -> LexResult<Token> {
        let mut text = String::new();
        text.push(first);

        while let Some(c) = self.next_char()? {
            if is_ident_continue(c) {
                text.push(c);
            } else {
                self.push_back(c);
                break;
            }
        }

        Ok(match self.table.lookup(&text) {
            Some(kind) => kind.into(),
            None => Token::Ident(text),
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::token::{Keyword, Symbol, Token};
    use crate::Lexer;
    use toka_util::Handler;

    fn lex_all(source: &str) -> Vec<Token> {
        let handler = Handler::new();
        Lexer::from_text(source, &handler)
            .collect::<Result<_, _>>()
            .unwrap()
    }

    fn ident(text: &str) -> Token {
        Token::Ident(text.to_string())
    }

    #[test]
    fn test_simple_identifier() {
        assert_eq!(lex_all("foo"), vec![ident("foo")]);
    }

    #[test]
    fn test_identifier_with_underscore_and_digits() {
        assert_eq!(lex_all("foo_bar_123"), vec![ident("foo_bar_123")]);
        assert_eq!(lex_all("_"), vec![ident("_")]);
        assert_eq!(lex_all("__9"), vec![ident("__9")]);
    }

    #[test]
    fn test_keywords() {
        for keyword in Keyword::ALL {
            assert_eq!(lex_all(keyword.spelling()), vec![Token::Keyword(keyword)]);
        }
    }

    #[test]
    fn test_keyword_prefix_is_identifier() {
        assert_eq!(lex_all("ifx"), vec![ident("ifx")]);
        assert_eq!(lex_all("if_"), vec![ident("if_")]);
        assert_eq!(lex_all("return1"), vec![ident("return1")]);
        assert_eq!(lex_all("whil"), vec![ident("whil")]);
    }

    #[test]
    fn test_keywords_are_case_sensitive() {
        assert_eq!(lex_all("If ELSE"), vec![ident("If"), ident("ELSE")]);
    }

    #[test]
    fn test_identifier_terminated_by_symbol() {
        assert_eq!(
            lex_all("x;"),
            vec![ident("x"), Token::Symbol(Symbol::Semicolon)]
        );
        assert_eq!(lex_all("x=="), vec![ident("x"), Token::Symbol(Symbol::Equal)]);
    }

    #[test]
    fn test_unicode_identifier() {
        assert_eq!(lex_all("αβγ δ1"), vec![ident("αβγ"), ident("δ1")]);
    }

    #[test]
    fn test_very_long_identifier() {
        let name = "a".repeat(10_000);
        assert_eq!(lex_all(&name), vec![ident(&name)]);
    }
}
