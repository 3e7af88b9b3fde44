//! Name formatting.
//!
//! Joins word fragments into camel-case identifiers and holds the identifier
//! grammar every public candidate has to satisfy.

use once_cell::sync::Lazy;
use regex::Regex;

static IDENTIFIER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\p{L}_$][\p{L}\p{Nd}_$]*$").expect("identifier pattern is valid")
});

/// Joins fragments into one compound-word identifier.
///
/// Empty fragments are dropped. The first remaining fragment is kept
/// verbatim; every later one has its first character upper-cased.
///
/// ```rust
/// use nomen::format::join;
/// assert_eq!(join(&["index", "of", "", "result"]), "indexOfResult");
/// assert_eq!(join(&["Ember", "get"]), "EmberGet");
/// ```
pub fn join<S: AsRef<str>>(fragments: &[S]) -> String {
    let mut parts = fragments
        .iter()
        .map(|fragment| fragment.as_ref())
        .filter(|fragment| !fragment.is_empty());
    let mut result = match parts.next() {
        Some(head) => head.to_string(),
        None => return String::new(),
    };
    for part in parts {
        result.push_str(&upper_first(part));
    }
    result
}

pub fn upper_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn lower_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Returns what follows `prefix` when it occupies exactly the first
/// compound-word segment of `name`, i.e. the next character is upper-case.
///
/// ```rust
/// use nomen::format::strip_word_prefix;
/// assert_eq!(strip_word_prefix("not", "notEqual"), Some("Equal"));
/// assert_eq!(strip_word_prefix("not", "nothing"), None);
/// assert_eq!(strip_word_prefix("not", "not"), None);
/// ```
pub fn strip_word_prefix<'n>(prefix: &str, name: &'n str) -> Option<&'n str> {
    let rest = name.strip_prefix(prefix)?;
    rest.chars()
        .next()
        .filter(|c| c.is_uppercase())
        .map(|_| rest)
}

pub fn has_word_prefix(prefix: &str, name: &str) -> bool {
    strip_word_prefix(prefix, name).is_some()
}

/// Splits text into its alphabetic runs.
pub fn split_words(text: &str) -> Vec<&str> {
    text.split(|c: char| !c.is_alphabetic())
        .filter(|word| !word.is_empty())
        .collect()
}

/// True when `candidate` is a syntactically valid identifier: a letter, `_`
/// or `$`, followed by letters, digits, `_` or `$`.
pub fn is_valid_identifier(candidate: &str) -> bool {
    IDENTIFIER.is_match(candidate)
}

/// How a fixed word is fused with a candidate name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinRule {
    /// `word` leads: `old` + `x` = `oldX`
    Prefix(&'static str),
    /// `word` trails: `x` + `incr` = `xIncr`
    Suffix(&'static str),
    PassThrough,
}

impl JoinRule {
    pub fn apply(&self, name: &str) -> String {
        match self {
            JoinRule::Prefix(word) => join(&[*word, name]),
            JoinRule::Suffix(word) => join(&[name, *word]),
            JoinRule::PassThrough => name.to_string(),
        }
    }
}
