//! Palindrome check: literal, exact-match comparison against the reversed
//! input.
//!
//! No normalization happens here. "Madam" is not "madam" and "race car" is
//! broken by its space; what the user typed is what gets compared.

/// Build a reversed copy of `s`, visiting characters from last to first.
pub fn reverse(s: &str) -> String {
    s.chars().rev().collect()
}

/// Check whether `s` reads the same forwards and backwards.
///
/// Case-sensitive and whitespace-sensitive; the empty string is trivially a
/// palindrome. The original is left untouched and compared against a reversed
/// copy.
pub fn is_palindrome(s: &str) -> bool {
    reverse(s) == s
}
