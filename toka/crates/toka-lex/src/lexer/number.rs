//! Number literal lexing.

use std::io::Read;

use crate::error::LexResult;
use crate::token::Token;
use crate::unicode::is_number_digit;
use crate::Lexer;

impl<'a, R: Read> Lexer<'a, R> {
    /// Lexes an integer literal whose first digit is `first`.
    ///
    /// The digits are kept as text: no sign, no decimal point, and leading
    /// zeros are preserved (`007` stays `007`).
    pub(super) fn lex_number(&mut self, first: char) -> LexResult<Token> {
        let mut digits = String::new();
        digits.push(first);

        while let Some(c) = self.next_char()? {
            if is_number_digit(c) {
                digits.push(c);
            } else {
                self.push_back(c);
                break;
            }
        }

        Ok(Token::Number(digits))
    }
}
