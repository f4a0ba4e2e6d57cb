//! Token type definitions.
//!
//! A [`Token`] is one of four shapes: a [`Keyword`], a [`Symbol`], an
//! identifier, or a number. Identifiers and numbers carry their source text
//! verbatim; numbers are never parsed, so `007` stays `007`.
//!
//! The `Display` form of a token is the name the driver prints:
//!
//! ```
//! use toka_lex::{Keyword, Symbol, Token};
//!
//! assert_eq!(Token::Keyword(Keyword::If).to_string(), "If");
//! assert_eq!(Token::Symbol(Symbol::LPar).to_string(), "LPar");
//! assert_eq!(Token::Ident("x".into()).to_string(), "Ident(x)");
//! assert_eq!(Token::Number("007".into()).to_string(), "Number(007)");
//! ```

use std::fmt;

use static_assertions::{assert_impl_all, const_assert_eq};

/// Reserved words.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Keyword {
    /// `if`
    If,
    /// `else`
    Else,
    /// `while`
    While,
    /// `break`
    Break,
    /// `continue`
    Continue,
    /// `return`
    Return,
}

impl Keyword {
    /// Every keyword, in recognition-table order.
    pub const ALL: [Keyword; 6] = [
        Keyword::If,
        Keyword::Else,
        Keyword::While,
        Keyword::Break,
        Keyword::Continue,
        Keyword::Return,
    ];

    /// The source spelling of the keyword.
    pub const fn spelling(self) -> &'static str {
        match self {
            Keyword::If => "if",
            Keyword::Else => "else",
            Keyword::While => "while",
            Keyword::Break => "break",
            Keyword::Continue => "continue",
            Keyword::Return => "return",
        }
    }

    /// The printed name of the keyword.
    pub const fn name(self) -> &'static str {
        match self {
            Keyword::If => "If",
            Keyword::Else => "Else",
            Keyword::While => "While",
            Keyword::Break => "Break",
            Keyword::Continue => "Continue",
            Keyword::Return => "Return",
        }
    }
}

/// Punctuation and operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Symbol {
    /// `=`
    Assign,
    /// `;`
    Semicolon,
    /// `(`
    LPar,
    /// `)`
    RPar,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `+`
    Plus,
    /// `*`
    Mult,
    /// `/`
    Div,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `==`
    Equal,
}

impl Symbol {
    /// Every symbol, in recognition-table order.
    pub const ALL: [Symbol; 12] = [
        Symbol::Assign,
        Symbol::Semicolon,
        Symbol::LPar,
        Symbol::RPar,
        Symbol::LBrace,
        Symbol::RBrace,
        Symbol::Plus,
        Symbol::Mult,
        Symbol::Div,
        Symbol::Lt,
        Symbol::Gt,
        Symbol::Equal,
    ];

    /// The source spelling of the symbol.
    pub const fn spelling(self) -> &'static str {
        match self {
            Symbol::Assign => "=",
            Symbol::Semicolon => ";",
            Symbol::LPar => "(",
            Symbol::RPar => ")",
            Symbol::LBrace => "{",
            Symbol::RBrace => "}",
            Symbol::Plus => "+",
            Symbol::Mult => "*",
            Symbol::Div => "/",
            Symbol::Lt => "<",
            Symbol::Gt => ">",
            Symbol::Equal => "==",
        }
    }

    /// The printed name of the symbol.
    pub const fn name(self) -> &'static str {
        match self {
            Symbol::Assign => "Assign",
            Symbol::Semicolon => "Semicolon",
            Symbol::LPar => "LPar",
            Symbol::RPar => "RPar",
            Symbol::LBrace => "LBrace",
            Symbol::RBrace => "RBrace",
            Symbol::Plus => "Plus",
            Symbol::Mult => "Mult",
            Symbol::Div => "Div",
            Symbol::Lt => "Lt",
            Symbol::Gt => "Gt",
            Symbol::Equal => "Equal",
        }
    }
}

/// The kind a recognition-table entry maps a spelling to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A reserved word
    Keyword(Keyword),
    /// Punctuation or operator
    Symbol(Symbol),
}

impl TokenKind {
    /// The printed name of the kind.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Keyword(k) => k.name(),
            TokenKind::Symbol(s) => s.name(),
        }
    }
}

/// A token produced by the lexer.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Token {
    /// Reserved word (`if`, `while`, ...)
    Keyword(Keyword),
    /// Punctuation or operator (`;`, `==`, ...)
    Symbol(Symbol),
    /// Identifier with its raw spelling
    Ident(String),
    /// Integer literal with its raw digits
    Number(String),
}

impl Token {
    /// Returns the source text this token was read from.
    pub fn text(&self) -> &str {
        match self {
            Token::Keyword(k) => k.spelling(),
            Token::Symbol(s) => s.spelling(),
            Token::Ident(text) | Token::Number(text) => text,
        }
    }

    /// Returns true for keyword tokens.
    pub fn is_keyword(&self) -> bool {
        matches!(self, Token::Keyword(_))
    }
}

impl From<TokenKind> for Token {
    fn from(kind: TokenKind) -> Self {
        match kind {
            TokenKind::Keyword(k) => Token::Keyword(k),
            TokenKind::Symbol(s) => Token::Symbol(s),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Keyword(k) => f.write_str(k.name()),
            Token::Symbol(s) => f.write_str(s.name()),
            Token::Ident(text) => write!(f, "Ident({})", text),
            Token::Number(text) => write!(f, "Number({})", text),
        }
    }
}

assert_impl_all!(Token: Send, Sync, Clone);
assert_impl_all!(TokenKind: Send, Sync, Copy);
const_assert_eq!(Keyword::ALL.len() + Symbol::ALL.len(), 18);
