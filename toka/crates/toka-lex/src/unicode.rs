//! Character classes used by the toka lexer.
//!
//! Identifiers accept Unicode letters; number literals are ASCII digits only.

/// Checks if a character is valid as the start of an identifier.
///
/// Valid identifier start characters are Unicode letters and the underscore.
///
/// # Example
///
/// ```
/// use toka_lex::unicode::is_ident_start;
///
/// assert!(is_ident_start('a'));
/// assert!(is_ident_start('_'));
/// assert!(is_ident_start('α'));  // Greek alpha
/// assert!(!is_ident_start('1'));
/// assert!(!is_ident_start('+'));
/// ```
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c == '_' || c.is_alphabetic()
}

/// Checks if a character is valid as a continuation of an identifier.
///
/// # Example
///
/// ```
/// use toka_lex::unicode::is_ident_continue;
///
/// assert!(is_ident_continue('a'));
/// assert!(is_ident_continue('_'));
/// assert!(is_ident_continue('1'));
/// assert!(!is_ident_continue('+'));
/// assert!(!is_ident_continue(' '));
/// ```
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    c == '_' || c.is_alphabetic() || is_number_digit(c)
}

/// Checks if a character is a digit of an integer literal.
///
/// # Example
///
/// ```
/// use toka_lex::unicode::is_number_digit;
///
/// assert!(is_number_digit('0'));
/// assert!(is_number_digit('9'));
/// assert!(!is_number_digit('٣'));  // Arabic-Indic three
/// assert!(!is_number_digit('a'));
/// ```
#[inline]
pub fn is_number_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Checks if a character separates tokens.
///
/// This is Unicode `White_Space`, so no-break spaces such as U+00A0 and
/// U+202F also separate tokens.
#[inline]
pub fn is_whitespace(c: char) -> bool {
    c.is_whitespace()
}
