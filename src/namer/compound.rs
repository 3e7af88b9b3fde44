//! Rules that combine the names of child expressions.

use super::ExpressionNamer;
use crate::ast::Expr;
use crate::format::{join, lower_first};
use crate::sequence::{combine, combine_pair, concat, defer, filter_map, from_fixed, map, CandidateSequence};
use crate::speech::SubjectExtractor;

impl<X: SubjectExtractor> ExpressionNamer<X> {
    /// `property`, then `myProperty` for `this.property`, then `objectProperty`.
    ///
    /// The property is named with `node` as its parent in every tier, so
    /// `list[0]` gives `list0`. The object never sees a parent.
    pub(super) fn member_access<'a>(
        &'a self,
        node: &'a Expr,
        object: &'a Expr,
        property: &'a Expr,
    ) -> CandidateSequence<'a> {
        let mut tiers = vec![self.names_for(property, Some(node))];

        if self.offers_my_tier() && matches!(object, Expr::ThisRef) {
            tiers.push(defer(move || {
                map(self.names_for(property, Some(node)), |name| join(&["my", name.as_str()]))
            }));
        }

        tiers.push(defer(move || {
            map(
                combine(vec![self.names_for(object, None), self.names_for(property, Some(node))]),
                |parts| join(parts.as_slice()),
            )
        }));

        concat(tiers)
    }

    /// The callee's subject, then `result`, then `calleeResult`.
    pub(super) fn call<'a>(&'a self, callee: &'a Expr) -> CandidateSequence<'a> {
        let subjects = filter_map(self.names_for(callee, None), move |name| {
            let subject = self.extractor.extract_subject(&name);
            (subject != name).then_some(subject)
        });

        concat(vec![
            subjects,
            from_fixed(["result".to_string()]),
            defer(move || {
                map(self.names_for(callee, None), |name| join(&[name.as_str(), "result"]))
            }),
        ])
    }

    /// `numberFormatter` then `newNumberFormatter` for `new NumberFormatter()`.
    pub(super) fn constructor_call<'a>(&'a self, callee: &'a Expr) -> CandidateSequence<'a> {
        concat(vec![
            map(self.names_for(callee, None), |name| lower_first(&name)),
            defer(move || {
                map(self.names_for(callee, None), |name| join(&["new", name.as_str()]))
            }),
        ])
    }

    /// The assigned value's names rank above the target's.
    pub(super) fn assignment<'a>(
        &'a self,
        node: &'a Expr,
        left: &'a Expr,
        right: &'a Expr,
    ) -> CandidateSequence<'a> {
        concat(vec![
            self.names_for(right, Some(node)),
            defer(move || self.names_for(left, Some(node))),
        ])
    }

    pub(super) fn conditional<'a>(
        &'a self,
        consequent: &'a Expr,
        alternate: &'a Expr,
    ) -> CandidateSequence<'a> {
        let either = combine_pair(self.names_for(consequent, None), self.names_for(alternate, None));
        concat(vec![
            map(either, |(yes, no)| join(&[yes.as_str(), "or", no.as_str()])),
            from_fixed(["result".to_string()]),
        ])
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::builder::*;
    use crate::ast::Expr;
    use crate::config::{NamerConfig, Profile};
    use crate::namer::ExpressionNamer;

    fn names(expr: &Expr) -> Vec<String> {
        ExpressionNamer::new(NamerConfig::default()).all_names(expr)
    }

    #[test]
    fn member_access_prefers_short_names() {
        assert_eq!(names(&path("foo", &["bar", "baz"])), vec!["baz", "barBaz", "fooBarBaz"]);
        assert_eq!(names(&path("Ember", &["get"])), vec!["get", "EmberGet"]);
    }

    #[test]
    fn computed_members_name_their_index() {
        assert_eq!(
            names(&member(ident("foo"), path("bar", &["baz"]))),
            vec!["baz", "barBaz", "fooBaz", "fooBarBaz"]
        );
        assert_eq!(names(&member(ident("list"), number(0.0))), vec!["list0"]);
        assert_eq!(
            names(&member(ident("s"), regex("a", ""))),
            vec!["regex", "pattern", "sRegex", "sPattern"]
        );
    }

    #[test]
    fn this_members_offer_a_my_tier_when_context_sensitive() {
        let expr = member(this(), ident("width"));
        assert_eq!(
            names(&expr),
            vec!["width", "myWidth", "thisWidth", "selfWidth", "thatWidth", "meWidth"]
        );

        let plain = ExpressionNamer::new(NamerConfig::with_profile(Profile::ContextInsensitive));
        assert_eq!(
            plain.all_names(&expr),
            vec!["width", "thisWidth", "selfWidth", "thatWidth", "meWidth"]
        );
    }

    #[test]
    fn calls_rank_subject_then_result() {
        assert_eq!(names(&call(ident("foo"))), vec!["result", "fooResult"]);
        assert_eq!(
            names(&call(ident("indexOf"))),
            vec!["index", "result", "indexOfResult"]
        );
        assert_eq!(
            names(&call(path("string", &["indexOf"]))),
            vec!["index", "stringIndex", "result", "indexOfResult", "stringIndexOfResult"]
        );
    }

    #[test]
    fn constructors_lower_case_the_class_name() {
        assert_eq!(
            names(&new(path("FieldKit", &["NumberFormatter"]))),
            vec![
                "numberFormatter",
                "fieldKitNumberFormatter",
                "newNumberFormatter",
                "newFieldKitNumberFormatter"
            ]
        );
    }

    #[test]
    fn assignment_puts_the_value_first() {
        assert_eq!(
            names(&assign(ident("x"), path("view", &["offset"]))),
            vec!["offset", "viewOffset", "x"]
        );
    }

    #[test]
    fn conditional_joins_branches_with_or() {
        assert_eq!(names(&conditional(ident("b"), ident("c"))), vec!["bOrC", "result"]);
        assert_eq!(names(&conditional(boolean(true), ident("c"))), vec!["result"]);
    }
}
