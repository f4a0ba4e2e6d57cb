//! Operator and punctuation lexing.
//!
//! `=` is the only character that may start a two-character symbol, so it
//! gets its own branch. Everything else is a single-character table lookup.

use std::io::Read;

use crate::error::LexResult;
use crate::token::{Symbol, Token};
use crate::Lexer;

impl<'a, R: Read> Lexer<'a, R> {
    /// Lexes `==` or `=` after a leading `=` has been consumed.
    ///
    /// Longest match wins: a second `=` makes [`Symbol::Equal`], anything
    /// else is pushed back and the result is [`Symbol::Assign`].
    pub(super) fn lex_equals(&mut self) -> LexResult<Token> {
        match self.next_char()? {
            Some('=') => Ok(Token::Symbol(Symbol::Equal)),
            Some(c) => {
                self.push_back(c);
                Ok(Token::Symbol(Symbol::Assign))
            }
            None => Ok(Token::Symbol(Symbol::Assign)),
        }
    }

    /// Lexes a single-character symbol, or fails with an unexpected
    /// character error if `c` starts no token.
    pub(super) fn lex_symbol(&mut self, c: char) -> LexResult<Token> {
        self.table
            .lookup_char(c)
            .map(Token::from)
            .ok_or_else(|| self.unexpected_char(c))
    }
}
