//! Rules for kinds without child expressions.

use crate::ast::{Expr, LiteralValue};
use crate::config::Profile;
use crate::format::{join, split_words};
use crate::sequence::{empty, from_fixed, CandidateSequence};

fn fixed<'a>(words: &[&str]) -> CandidateSequence<'a> {
    from_fixed(words.iter().map(|word| word.to_string()).collect::<Vec<_>>())
}

pub(super) fn identifier<'a>(name: &str) -> CandidateSequence<'a> {
    from_fixed([name.to_string()])
}

pub(super) fn literal<'a>(
    value: &LiteralValue,
    parent: Option<&Expr>,
    profile: Profile,
) -> CandidateSequence<'a> {
    log::trace!("{} literal under {profile}", value.category());
    match value {
        LiteralValue::Number(number) => match (parent, profile) {
            (Some(_), Profile::ContextSensitive) => from_fixed([decimal_text(*number)]),
            _ => fixed(&["number"]),
        },
        LiteralValue::String(text) => {
            let words = split_words(text);
            if words.is_empty() {
                fixed(&["string"])
            } else {
                from_fixed([join(&words), "string".to_string()])
            }
        }
        LiteralValue::Null => fixed(&["null", "none", "nil"]),
        LiteralValue::Regex { .. } => fixed(&["regex", "pattern"]),
        LiteralValue::Boolean(_) | LiteralValue::Absent => empty(),
    }
}

pub(super) fn function<'a>(name: Option<&str>) -> CandidateSequence<'a> {
    let own = name.map(str::to_string);
    from_fixed(own.into_iter().chain(["fn".to_string(), "func".to_string()]))
}

pub(super) fn this_ref<'a>() -> CandidateSequence<'a> {
    fixed(&["this", "self", "that", "me"])
}

pub(super) fn object_literal<'a>() -> CandidateSequence<'a> {
    fixed(&["object", "obj"])
}

pub(super) fn array_literal<'a>() -> CandidateSequence<'a> {
    fixed(&["list", "array", "arr"])
}

/// Shortest decimal text for `value`, spelled the way a JavaScript engine
/// prints it: integers without a fractional part, no negative zero, and
/// exponent form (`1e+21`, `1e-7`) for magnitudes outside `[1e-6, 1e21)`.
fn decimal_text(value: f64) -> String {
    let magnitude = value.abs();
    if value == 0.0 {
        "0".to_string()
    } else if value == f64::INFINITY {
        "Infinity".to_string()
    } else if value == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if magnitude >= 1e21 || magnitude < 1e-6 {
        let text = format!("{value:e}");
        match text.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => text,
        }
    } else {
        value.to_string()
    }
}
