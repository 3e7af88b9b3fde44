//! Rules for operator expressions.

use super::ExpressionNamer;
use crate::ast::{BinaryOperator, Expr, LogicalOperator, UnaryOperator};
use crate::format::{has_word_prefix, join, lower_first, strip_word_prefix, JoinRule};
use crate::sequence::{combine_pair, from_fixed, map, CandidateSequence};
use crate::speech::SubjectExtractor;

const POSTFIX_UPDATE: [JoinRule; 3] = [
    JoinRule::PassThrough,
    JoinRule::Prefix("old"),
    JoinRule::Prefix("original"),
];

const PREFIX_UPDATE: [JoinRule; 3] = [
    JoinRule::Prefix("next"),
    JoinRule::Prefix("new"),
    JoinRule::Suffix("incr"),
];

/// The word a unary operator puts in front of its operand's names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PrefixWord {
    word: &'static str,
    /// Applying the operator to a name that already carries the word
    /// cancels it out (`!notEqual` is `equal`).
    removable: bool,
}

impl PrefixWord {
    fn for_operator(operator: UnaryOperator) -> Option<Self> {
        let (word, removable) = match operator {
            UnaryOperator::Not => ("not", true),
            UnaryOperator::Negative => ("negative", true),
            UnaryOperator::Positive => ("positive", false),
            UnaryOperator::Void => ("void", false),
            UnaryOperator::BitwiseNot | UnaryOperator::TypeOf | UnaryOperator::Delete => {
                return None
            }
        };
        Some(Self { word, removable })
    }

    fn apply(self, name: String) -> String {
        if self.removable {
            if let Some(rest) = strip_word_prefix(self.word, &name) {
                return lower_first(rest);
            }
        }
        if has_word_prefix(self.word, &name) {
            name
        } else {
            join(&[self.word, name.as_str()])
        }
    }
}

fn binary_connective(operator: BinaryOperator) -> &'static str {
    match operator {
        BinaryOperator::Add => "plus",
        BinaryOperator::Subtract => "minus",
        BinaryOperator::Multiply => "times",
        BinaryOperator::Divide => "over",
        _ => "",
    }
}

fn logical_connective(operator: LogicalOperator) -> &'static str {
    match operator {
        LogicalOperator::And => "and",
        LogicalOperator::Or => "or",
        LogicalOperator::Coalesce => "",
    }
}

impl<X: SubjectExtractor> ExpressionNamer<X> {
    pub(super) fn unary<'a>(
        &'a self,
        node: &'a Expr,
        operator: UnaryOperator,
        argument: &'a Expr,
    ) -> CandidateSequence<'a> {
        let operand = self.names_for(argument, Some(node));
        match PrefixWord::for_operator(operator) {
            Some(prefix) => map(operand, move |name| prefix.apply(name)),
            None => operand,
        }
    }

    pub(super) fn binary<'a>(
        &'a self,
        operator: BinaryOperator,
        left: &'a Expr,
        right: &'a Expr,
    ) -> CandidateSequence<'a> {
        self.joined_pair(binary_connective(operator), left, right)
    }

    pub(super) fn logical<'a>(
        &'a self,
        operator: LogicalOperator,
        left: &'a Expr,
        right: &'a Expr,
    ) -> CandidateSequence<'a> {
        self.joined_pair(logical_connective(operator), left, right)
    }

    /// `x++` reads the value before the step, `++x` after it.
    pub(super) fn update<'a>(&'a self, prefix: bool, argument: &'a Expr) -> CandidateSequence<'a> {
        let rules = if prefix { PREFIX_UPDATE } else { POSTFIX_UPDATE };
        map(
            combine_pair(from_fixed(rules), self.names_for(argument, None)),
            |(rule, name)| rule.apply(&name),
        )
    }

    fn joined_pair<'a>(
        &'a self,
        connective: &'static str,
        left: &'a Expr,
        right: &'a Expr,
    ) -> CandidateSequence<'a> {
        map(
            combine_pair(self.names_for(left, None), self.names_for(right, None)),
            move |(left, right)| join(&[left.as_str(), connective, right.as_str()]),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::builder::*;
    use crate::config::NamerConfig;

    fn names(expr: &Expr) -> Vec<String> {
        ExpressionNamer::new(NamerConfig::default()).all_names(expr)
    }

    #[test]
    fn not_and_negative_cancel_existing_prefixes() {
        assert_eq!(names(&unary(UnaryOperator::Not, ident("equal"))), vec!["notEqual"]);
        assert_eq!(names(&unary(UnaryOperator::Not, ident("notEqual"))), vec!["equal"]);
        assert_eq!(names(&unary(UnaryOperator::Negative, ident("offset"))), vec!["negativeOffset"]);
        assert_eq!(names(&unary(UnaryOperator::Negative, ident("negativeOffset"))), vec!["offset"]);
    }

    #[test]
    fn positive_and_void_are_never_stripped() {
        assert_eq!(names(&unary(UnaryOperator::Positive, ident("offset"))), vec!["positiveOffset"]);
        assert_eq!(
            names(&unary(UnaryOperator::Positive, ident("positiveOffset"))),
            vec!["positiveOffset"]
        );
        assert_eq!(names(&unary(UnaryOperator::Void, ident("name"))), vec!["voidName"]);
        assert_eq!(names(&unary(UnaryOperator::Void, ident("voidName"))), vec!["voidName"]);
    }

    #[test]
    fn prefix_match_respects_word_boundaries() {
        assert_eq!(names(&unary(UnaryOperator::Not, ident("nothing"))), vec!["notNothing"]);
        assert_eq!(names(&unary(UnaryOperator::Void, ident("voided"))), vec!["voidVoided"]);
    }

    #[test]
    fn other_unary_operators_pass_names_through() {
        assert_eq!(names(&unary(UnaryOperator::TypeOf, ident("value"))), vec!["value"]);
        assert_eq!(names(&unary(UnaryOperator::BitwiseNot, ident("mask"))), vec!["mask"]);
    }

    #[test]
    fn arithmetic_connectives() {
        let width = || path("view", &["width"]);
        for (operator, word) in [
            (BinaryOperator::Add, "Plus"),
            (BinaryOperator::Subtract, "Minus"),
            (BinaryOperator::Multiply, "Times"),
            (BinaryOperator::Divide, "Over"),
        ] {
            assert_eq!(
                names(&binary(operator, ident("x"), width())),
                vec![format!("x{word}Width"), format!("x{word}ViewWidth")]
            );
        }
        assert_eq!(names(&binary(BinaryOperator::StrictEqual, ident("a"), ident("b"))), vec!["aB"]);
    }

    #[test]
    fn logical_connectives() {
        assert_eq!(names(&logical(LogicalOperator::And, ident("a"), ident("b"))), vec!["aAndB"]);
        assert_eq!(names(&logical(LogicalOperator::Or, ident("a"), ident("b"))), vec!["aOrB"]);
        assert_eq!(names(&logical(LogicalOperator::Coalesce, ident("a"), ident("b"))), vec!["aB"]);
    }

    #[test]
    fn update_rules_depend_on_position() {
        assert_eq!(names(&update(false, ident("x"))), vec!["x", "oldX", "originalX"]);
        assert_eq!(names(&update(true, ident("x"))), vec!["nextX", "newX", "xIncr"]);
    }

    #[test]
    fn update_enumerates_rules_outermost() {
        assert_eq!(
            names(&update(false, path("a", &["b"]))),
            vec!["b", "aB", "oldB", "oldAB", "originalB", "originalAB"]
        );
    }

    #[test]
    fn operands_without_names_drop_the_whole_product() {
        assert!(names(&binary(BinaryOperator::Add, ident("x"), boolean(false))).is_empty());
    }
}
