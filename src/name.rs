// src/name.rs

//! Normalization of hand-written recipe names
//!
//! Turns free-form input into a display name made of capitalized words
//! separated by single spaces:
//!
//! - `Riz@z RISO00tto!` -> `Rizz Risotto`
//! - `alpHa-alFRedo` -> `Alpha Alfredo`
//! - `meatball` -> `Meatball`
//!
//! Hyphens and underscores act as word separators. Any other character that
//! is not an ASCII letter or whitespace is dropped without splitting the word.

use crate::error::{Error, Result};
use regex::Regex;
use std::sync::LazyLock;

static SEPARATORS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[-_]+").unwrap());
static NOISE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-zA-Z\s]").unwrap());
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Normalize a hand-written name
///
/// Fails with [`Error::InvalidName`] if no letters remain.
pub fn parse_handwriting(input: &str) -> Result<String> {
    let separated = SEPARATORS.replace_all(input, " ");
    let letters = NOISE.replace_all(separated.trim(), "");
    let spaced = WHITESPACE.replace_all(letters.trim(), " ");

    let name = spaced
        .split(' ')
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ");

    if name.is_empty() {
        return Err(Error::InvalidName(input.to_string()));
    }
    Ok(name)
}

fn capitalize(word: &str) -> String {
    let lower = word.to_ascii_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drops_noise_inside_words() {
        assert_eq!(parse_handwriting("Riz@z RISO00tto!").unwrap(), "Rizz Risotto");
    }

    #[test]
    fn test_separators_split_words() {
        assert_eq!(parse_handwriting("alpHa-alFRedo").unwrap(), "Alpha Alfredo");
        assert_eq!(parse_handwriting("skibidi__spaghetti").unwrap(), "Skibidi Spaghetti");
        assert_eq!(parse_handwriting("a-_-b").unwrap(), "A B");
    }

    #[test]
    fn test_single_word() {
        assert_eq!(parse_handwriting("meatball").unwrap(), "Meatball");
        assert_eq!(parse_handwriting("MEATBALL").unwrap(), "Meatball");
    }

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(parse_handwriting("  rizz \t\n  risotto  ").unwrap(), "Rizz Risotto");
    }

    #[test]
    fn test_trailing_noise_leaves_no_space() {
        assert_eq!(parse_handwriting("rizz !").unwrap(), "Rizz");
        assert_eq!(parse_handwriting("! rizz").unwrap(), "Rizz");
    }

    #[test]
    fn test_nothing_alphabetic() {
        assert_eq!(
            parse_handwriting("  -- 123 !!"),
            Err(Error::InvalidName("  -- 123 !!".to_string()))
        );
        assert!(parse_handwriting("").is_err());
    }
}
