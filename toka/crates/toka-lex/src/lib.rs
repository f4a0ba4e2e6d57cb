//! toka-lex - Streaming lexer for the toka language
//!
//! This crate turns a stream of characters into a stream of tokens. It
//! reads from any [`std::io::Read`] source on demand, keeps at most one
//! character of lookahead, and stops at the first character that cannot
//! start a token.
//!
//! # Example Usage
//!
//! ```
//! use toka_lex::{Keyword, Lexer, Symbol, Token};
//! use toka_util::Handler;
//!
//! let handler = Handler::new();
//! let mut lexer = Lexer::from_text("if (x == 007) { return x; }", &handler);
//!
//! assert_eq!(lexer.next_token().unwrap(), Some(Token::Keyword(Keyword::If)));
//! assert_eq!(lexer.next_token().unwrap(), Some(Token::Symbol(Symbol::LPar)));
//!
//! // The lexer is also an iterator of `Result<Token, LexError>`.
//! let rest: Vec<String> = lexer.map(|t| t.unwrap().to_string()).collect();
//! assert_eq!(
//!     rest.join(" "),
//!     "Ident(x) Equal Number(007) RPar LBrace Return Ident(x) Semicolon RBrace"
//! );
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token, keyword and symbol definitions
//! - [`table`] - Spelling to token kind lookup
//! - [`lexer`] - Main lexer implementation
//! - [`source`] - UTF-8 character source over a byte reader
//! - [`unicode`] - Character classes
//! - [`error`] - Error types
//!
//! # Token Categories
//!
//! **Keywords**: `if`, `else`, `while`, `break`, `continue`, `return`
//!
//! **Symbols**: `=` `;` `(` `)` `{` `}` `+` `*` `/` `<` `>` `==`
//!
//! **Identifiers**: a letter or `_` followed by letters, digits and `_`
//!
//! **Numbers**: a run of ASCII digits, kept verbatim (`007` stays `007`)
//!
//! Anything else is an error and ends the stream.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod lexer;
pub mod source;
pub mod table;
pub mod token;
pub mod unicode;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use error::{LexError, LexResult, TableError};
pub use lexer::Lexer;
pub use source::CharSource;
pub use table::RecognitionTable;
pub use token::{Keyword, Symbol, Token, TokenKind};
