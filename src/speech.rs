//! Subject extraction.
//!
//! Recovers the noun a call is about from the callee's name: a leading verb
//! is dropped (`getFirstPerson` → `firstPerson`) and a trailing prepositional
//! phrase is cut off (`objectAtIndex` → `object`). Names with neither come
//! back unchanged, which the call rule reads as "no subject found".

use once_cell::sync::Lazy;
use regex::Regex;

use crate::format::lower_first;

static LEADING_VERB: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:get|fetch|retrieve|call)([A-Z].*)$").expect("verb pattern is valid")
});

static PREPOSITION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?:^|[a-z])",
        r"(?:About|Above|Across|After|Against|Along|Among|Around|At|Before|Behind|Below|",
        r"Beneath|Beside|Besides|Between|Beyond|But|By|Down|During|Except|For|From|In|",
        r"Inside|Into|Like|Near|Of|Off|On|Onto|Opposite|Out|Outside|Over|Past|Since|",
        r"Through|To|Toward|Under|Underneath|Until|Up|Upon|With|Within|Without)",
        r"(?:[A-Z]|$)",
    ))
    .expect("preposition pattern is valid")
});

/// Collaborator that turns a callee name into the name of its subject.
///
/// Must be pure. Returning the input unchanged means no subject was found.
/// Any `Fn(&str) -> String` works as an extractor.
pub trait SubjectExtractor {
    fn extract_subject(&self, name: &str) -> String;
}

impl<F> SubjectExtractor for F
where
    F: Fn(&str) -> String,
{
    fn extract_subject(&self, name: &str) -> String {
        self(name)
    }
}

/// The default English verb/preposition heuristic.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpeechExtractor;

impl SubjectExtractor for SpeechExtractor {
    fn extract_subject(&self, name: &str) -> String {
        extract_subject(name)
    }
}

/// Extracts the subject of `name`.
///
/// ```rust
/// use nomen::speech::extract_subject;
/// assert_eq!(extract_subject("getValueForKey"), "value");
/// assert_eq!(extract_subject("indexOf"), "index");
/// assert_eq!(extract_subject("foo"), "foo");
/// ```
pub fn extract_subject(name: &str) -> String {
    let mut subject = match LEADING_VERB.captures(name).and_then(|caps| caps.get(1)) {
        Some(rest) => lower_first(rest.as_str()),
        None => name.to_string(),
    };

    if let Some(found) = PREPOSITION.find(&subject) {
        // The match opens on the letter before the preposition (or on the
        // preposition itself at the start); keep everything up to and
        // including that first character. Both are ASCII.
        subject.truncate(found.start() + 1);
    }

    subject
}
