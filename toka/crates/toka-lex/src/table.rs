//! Recognition table: exact spelling to token kind.
//!
//! The standard table has 18 entries: the six keywords and the twelve
//! symbols. It is built once on first use and shared read-only for the
//! life of the process.
//!
//! # Example
//!
//! ```
//! use toka_lex::{Keyword, RecognitionTable, Symbol, TokenKind};
//!
//! let table = RecognitionTable::global();
//! assert_eq!(table.len(), 18);
//! assert_eq!(table.lookup("while"), Some(TokenKind::Keyword(Keyword::While)));
//! assert_eq!(table.lookup("=="), Some(TokenKind::Symbol(Symbol::Equal)));
//! assert_eq!(table.lookup("wh"), None);
//! ```

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

use crate::error::TableError;
use crate::token::{Keyword, Symbol, TokenKind};

static STANDARD_TABLE: LazyLock<RecognitionTable> = LazyLock::new(RecognitionTable::standard);

/// Immutable mapping from literal spelling to token kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecognitionTable {
    entries: FxHashMap<&'static str, TokenKind>,
}

impl RecognitionTable {
    /// Returns the process-wide standard table.
    pub fn global() -> &'static RecognitionTable {
        &STANDARD_TABLE
    }

    /// Builds the standard table from [`Keyword::ALL`] and [`Symbol::ALL`].
    pub fn standard() -> Self {
        let keywords = Keyword::ALL
            .into_iter()
            .map(|k| (k.spelling(), TokenKind::Keyword(k)));
        let symbols = Symbol::ALL
            .into_iter()
            .map(|s| (s.spelling(), TokenKind::Symbol(s)));
        Self {
            entries: keywords.chain(symbols).collect(),
        }
    }

    /// Builds a table from explicit entries.
    ///
    /// # Errors
    ///
    /// Returns [`TableError`] if a spelling is empty or appears twice.
    pub fn from_entries<I>(entries: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (&'static str, TokenKind)>,
    {
        let mut map = FxHashMap::default();
        for (spelling, kind) in entries {
            if spelling.is_empty() {
                return Err(TableError::EmptySpelling);
            }
            if map.insert(spelling, kind).is_some() {
                return Err(TableError::DuplicateSpelling(spelling));
            }
        }
        Ok(Self { entries: map })
    }

    /// Looks up an exact spelling.
    #[inline]
    pub fn lookup(&self, spelling: &str) -> Option<TokenKind> {
        self.entries.get(spelling).copied()
    }

    /// Looks up a single-character spelling.
    #[inline]
    pub fn lookup_char(&self, c: char) -> Option<TokenKind> {
        let mut buf = [0u8; 4];
        self.lookup(c.encode_utf8(&mut buf))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(spelling, kind)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, TokenKind)> + '_ {
        self.entries.iter().map(|(s, k)| (*s, *k))
    }
}

impl Default for RecognitionTable {
    fn default() -> Self {
        Self::standard()
    }
}
