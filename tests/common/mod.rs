//! Shared helpers for the integration tests.

#![allow(dead_code)]

use nomen::{ExpressionNamer, NamerConfig, Profile};

/// Parses `source` and returns every valid name with the default profile.
pub fn names(source: &str) -> Vec<String> {
    match nomen::names_for_source(source) {
        Ok(names) => names,
        Err(e) => panic!("{source:?} failed: {e}"),
    }
}

/// Like [`names`], with an explicit profile.
pub fn names_with(profile: Profile, source: &str) -> Vec<String> {
    let expr = match nomen::syntax::parse(source) {
        Ok(expr) => expr,
        Err(e) => panic!("{source:?} failed to parse: {e}"),
    };
    ExpressionNamer::new(NamerConfig::with_profile(profile)).all_names(&expr)
}

/// Path to a file under `tests/fixtures`.
pub fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{name}", env!("CARGO_MANIFEST_DIR"))
}
