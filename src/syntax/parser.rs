//! Nomen Parser
//!
//! Converts JavaScript expression source into an [`Expr`] tree. The parser is
//! purely syntactic and keeps only what the naming rules read.

use once_cell::sync::Lazy;
use pest::error::{Error, InputLocation};
use pest::iterators::{Pair, Pairs};
use pest::pratt_parser::{Assoc, Op, PrattParser};
use pest::Parser;
use pest_derive::Parser;

use crate::ast::builder::*;
use crate::ast::{BinaryOperator, Expr, LogicalOperator, UnaryOperator};
use crate::errors::{ErrorKind, NomenError, SourceContext};

#[derive(Parser)]
#[grammar = "syntax/grammar.pest"]
struct NomenParser;

/// Binary and logical operators, loosest binding first.
static PRATT: Lazy<PrattParser<Rule>> = Lazy::new(|| {
    PrattParser::new()
        .op(Op::infix(Rule::op_or, Assoc::Left))
        .op(Op::infix(Rule::op_and, Assoc::Left))
        .op(Op::infix(Rule::op_bitor, Assoc::Left))
        .op(Op::infix(Rule::op_bitxor, Assoc::Left))
        .op(Op::infix(Rule::op_bitand, Assoc::Left))
        .op(Op::infix(Rule::op_equality, Assoc::Left))
        .op(Op::infix(Rule::op_relational, Assoc::Left))
        .op(Op::infix(Rule::op_shift, Assoc::Left))
        .op(Op::infix(Rule::op_additive, Assoc::Left))
        .op(Op::infix(Rule::op_multiplicative, Assoc::Left))
        .op(Op::infix(Rule::op_exponent, Assoc::Right))
});

// ============================================================================
// PUBLIC API
// ============================================================================

/// Parses one expression, or one function declaration.
///
/// A trailing `;` is allowed.
pub fn parse(source_text: &str) -> Result<Expr, NomenError> {
    parse_named("<input>", source_text)
}

/// Like [`parse`], labelling diagnostics with `name`.
pub fn parse_named(name: &str, source_text: &str) -> Result<Expr, NomenError> {
    let source = SourceContext::from_file(name, source_text);

    if source_text.trim().is_empty() {
        return Err(source
            .report(
                ErrorKind::Syntax {
                    message: "empty input".into(),
                },
                (0..source_text.len()).into(),
            )
            .with_help("pass a JavaScript expression such as `foo.bar()`"));
    }

    let mut pairs = NomenParser::parse(Rule::program, source_text)
        .map_err(|e| convert_parse_error(e, &source))?;

    let program = next_child(&mut pairs, "program", 0..source_text.len(), &source)?;
    let span = program.as_span();
    let body = program
        .into_inner()
        .find(|p| p.as_rule() != Rule::EOI)
        .ok_or_else(|| malformed(&source, "program", span.start()..span.end()))?;

    let expr = build_expr(body, &source)?;
    log::debug!("parsed {} ({} nodes) from {name}", expr.kind(), expr.node_count());
    Ok(expr)
}

// ============================================================================
// AST BUILDERS
// ============================================================================

fn build_expr(pair: Pair<Rule>, source: &SourceContext) -> Result<Expr, NomenError> {
    let span = get_span(&pair);

    match pair.as_rule() {
        Rule::expression => {
            let mut inner = pair.into_inner();
            let target = build_expr(next_child(&mut inner, "expression", span.clone(), source)?, source)?;
            // `x = y`, `x += y`, ...: the operator pair is followed by the value
            match (inner.next(), inner.next()) {
                (Some(_assign_op), Some(value)) => Ok(assign(target, build_expr(value, source)?)),
                _ => Ok(target),
            }
        }

        Rule::conditional => {
            let mut inner = pair.into_inner();
            let test = build_expr(next_child(&mut inner, "conditional", span.clone(), source)?, source)?;
            match (inner.next(), inner.next()) {
                (Some(consequent), Some(alternate)) => Ok(conditional(
                    build_expr(consequent, source)?,
                    build_expr(alternate, source)?,
                )),
                _ => Ok(test),
            }
        }

        Rule::binary => build_binary(pair.into_inner(), source),

        Rule::unary => build_unary(pair, source),

        Rule::postfix => {
            let mut inner = pair.into_inner();
            let operand = build_expr(next_child(&mut inner, "postfix", span, source)?, source)?;
            if inner.next().is_some() {
                Ok(update(false, operand))
            } else {
                Ok(operand)
            }
        }

        Rule::lhs | Rule::new_callee => build_chain(pair, source),

        Rule::new_expr => {
            let callee = pair
                .into_inner()
                .find(|p| p.as_rule() == Rule::new_callee)
                .ok_or_else(|| malformed(source, "new", span))?;
            Ok(new(build_expr(callee, source)?))
        }

        Rule::function_decl | Rule::function_expr => {
            let is_decl = pair.as_rule() == Rule::function_decl;
            let name = pair
                .into_inner()
                .find(|p| p.as_rule() == Rule::identifier)
                .map(|p| p.as_str().to_string());
            Ok(if is_decl {
                Expr::FunctionDecl { name }
            } else {
                Expr::FunctionExpr { name }
            })
        }

        Rule::identifier => Ok(ident(pair.as_str())),

        Rule::this => Ok(this()),

        Rule::null => Ok(null()),

        Rule::boolean => match pair.as_str() {
            "true" => Ok(boolean(true)),
            "false" => Ok(boolean(false)),
            text => Err(invalid_literal(source, "boolean", text, span)),
        },

        Rule::number => Ok(number(parse_number(pair.as_str(), span, source)?)),

        Rule::string => Ok(string(unescape_string(pair.as_str(), span, source)?)),

        Rule::regex => {
            let mut pattern = "";
            let mut flags = "";
            for part in pair.into_inner() {
                match part.as_rule() {
                    Rule::regex_body => pattern = part.as_str(),
                    Rule::regex_flags => flags = part.as_str(),
                    _ => {}
                }
            }
            Ok(regex(pattern, flags))
        }

        Rule::object_lit => Ok(object()),

        Rule::array_lit => Ok(array()),

        rule => Err(source.report(
            ErrorKind::Syntax {
                message: format!("unexpected {:?}", rule),
            },
            span.into(),
        )),
    }
}

/// Applies the Pratt table to `unary (op unary)*`.
fn build_binary(pairs: Pairs<Rule>, source: &SourceContext) -> Result<Expr, NomenError> {
    PRATT
        .map_primary(|primary| build_expr(primary, source))
        .map_infix(|lhs, op, rhs| {
            let (lhs, rhs) = (lhs?, rhs?);
            let symbol = op.as_str();
            match op.as_rule() {
                Rule::op_or | Rule::op_and => LogicalOperator::from_symbol(symbol)
                    .map(|operator| logical(operator, lhs, rhs))
                    .ok_or_else(|| unknown_operator(source, "logical", symbol, get_span(&op))),
                _ => BinaryOperator::from_symbol(symbol)
                    .map(|operator| binary(operator, lhs, rhs))
                    .ok_or_else(|| unknown_operator(source, "binary", symbol, get_span(&op))),
            }
        })
        .parse(pairs)
}

/// Prefix operators apply right to left: `!-x` is `!(-x)`.
fn build_unary(pair: Pair<Rule>, source: &SourceContext) -> Result<Expr, NomenError> {
    let span = get_span(&pair);
    let mut prefixes = Vec::new();
    let mut operand = None;

    for part in pair.into_inner() {
        match part.as_rule() {
            Rule::prefix_update | Rule::unary_op => prefixes.push(part),
            _ => operand = Some(build_expr(part, source)?),
        }
    }

    let operand = operand.ok_or_else(|| malformed(source, "unary", span))?;
    prefixes.into_iter().rev().try_fold(operand, |argument, op| {
        if op.as_rule() == Rule::prefix_update {
            return Ok(update(true, argument));
        }
        UnaryOperator::from_symbol(op.as_str())
            .map(|operator| unary(operator, argument))
            .ok_or_else(|| unknown_operator(source, "unary", op.as_str(), get_span(&op)))
    })
}

/// A primary followed by `.name`, `[index]` and `(args)` accessors.
fn build_chain(pair: Pair<Rule>, source: &SourceContext) -> Result<Expr, NomenError> {
    let span = get_span(&pair);
    let mut inner = pair.into_inner();
    let mut expr = build_expr(next_child(&mut inner, "member chain", span.clone(), source)?, source)?;

    for accessor in inner {
        let accessor_span = get_span(&accessor);
        expr = match accessor.as_rule() {
            Rule::dot_member => {
                let name = accessor
                    .into_inner()
                    .next()
                    .ok_or_else(|| malformed(source, "member", accessor_span))?;
                member(expr, ident(name.as_str()))
            }
            Rule::index_member => {
                let index = accessor
                    .into_inner()
                    .next()
                    .ok_or_else(|| malformed(source, "computed member", accessor_span))?;
                member(expr, build_expr(index, source)?)
            }
            Rule::arguments => call(expr),
            _ => return Err(malformed(source, "member chain", accessor_span)),
        };
    }

    Ok(expr)
}

// ============================================================================
// LITERALS
// ============================================================================

fn parse_number(text: &str, span: Span, source: &SourceContext) -> Result<f64, NomenError> {
    let parsed = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        // Hex literals have no width limit; fold digits into the float directly.
        Some(hex) => hex
            .chars()
            .try_fold(0.0_f64, |acc, digit| digit.to_digit(16).map(|d| acc * 16.0 + f64::from(d))),
        None => text.parse::<f64>().ok(),
    };
    parsed.ok_or_else(|| invalid_literal(source, "number", text, span))
}

fn unescape_string(text: &str, span: Span, source: &SourceContext) -> Result<String, NomenError> {
    // Remove surrounding quotes
    let inner = &text[1..text.len() - 1];
    let mut result = String::with_capacity(inner.len());
    let mut chars = inner.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            result.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => result.push('\n'),
            Some('t') => result.push('\t'),
            Some('r') => result.push('\r'),
            Some('b') => result.push('\u{8}'),
            Some('f') => result.push('\u{c}'),
            Some('v') => result.push('\u{b}'),
            Some('0') => result.push('\0'),
            Some('x') => {
                let digits: String = chars.by_ref().take(2).collect();
                result.push(code_point(&digits, text, span.clone(), source)?);
            }
            Some('u') if chars.peek() == Some(&'{') => {
                chars.next();
                let digits: String = chars.by_ref().take_while(|c| *c != '}').collect();
                result.push(code_point(&digits, text, span.clone(), source)?);
            }
            Some('u') => {
                let digits: String = chars.by_ref().take(4).collect();
                result.push(code_point(&digits, text, span.clone(), source)?);
            }
            // line continuation
            Some('\n') => {}
            Some(other) => result.push(other),
            None => result.push('\\'),
        }
    }

    Ok(result)
}

fn code_point(digits: &str, text: &str, span: Span, source: &SourceContext) -> Result<char, NomenError> {
    u32::from_str_radix(digits, 16)
        .ok()
        .and_then(char::from_u32)
        .ok_or_else(|| invalid_literal(source, "string", text, span))
}

// ============================================================================
// UTILITIES
// ============================================================================

type Span = std::ops::Range<usize>;

fn get_span(pair: &Pair<Rule>) -> Span {
    pair.as_span().start()..pair.as_span().end()
}

fn next_child<'i>(
    pairs: &mut Pairs<'i, Rule>,
    construct: &str,
    span: Span,
    source: &SourceContext,
) -> Result<Pair<'i, Rule>, NomenError> {
    pairs.next().ok_or_else(|| malformed(source, construct, span))
}

// ============================================================================
// ERROR HANDLING
// ============================================================================

fn malformed(source: &SourceContext, construct: &str, span: Span) -> NomenError {
    source.report(
        ErrorKind::Syntax {
            message: format!("incomplete {construct}"),
        },
        span.into(),
    )
}

fn invalid_literal(source: &SourceContext, literal_type: &str, value: &str, span: Span) -> NomenError {
    source.report(
        ErrorKind::InvalidLiteral {
            literal_type: literal_type.into(),
            value: value.into(),
        },
        span.into(),
    )
}

fn unknown_operator(source: &SourceContext, kind: &str, operator: &str, span: Span) -> NomenError {
    source.report(
        ErrorKind::UnknownOperator {
            kind: kind.into(),
            operator: operator.into(),
        },
        span.into(),
    )
}

fn rule_label(rule: &Rule) -> String {
    let label = match rule {
        Rule::EOI => "end of input",
        Rule::expression | Rule::conditional | Rule::binary | Rule::unary | Rule::postfix => {
            "expression"
        }
        Rule::lhs | Rule::new_callee => "operand",
        Rule::identifier | Rule::member_name => "identifier",
        Rule::assign_op => "assignment operator",
        Rule::postfix_update | Rule::prefix_update => "`++` or `--`",
        Rule::unary_op => "unary operator",
        Rule::dot_member | Rule::index_member => "member access",
        Rule::arguments => "argument list",
        Rule::params => "parameter list",
        Rule::block => "function body",
        Rule::property => "object property",
        Rule::string => "string",
        Rule::number => "number",
        Rule::regex_flags => "regular expression flags",
        Rule::op_or
        | Rule::op_and
        | Rule::op_bitor
        | Rule::op_bitxor
        | Rule::op_bitand
        | Rule::op_equality
        | Rule::op_relational
        | Rule::op_shift
        | Rule::op_additive
        | Rule::op_multiplicative
        | Rule::op_exponent => "operator",
        other => return format!("{:?}", other),
    };
    label.to_string()
}

fn convert_parse_error(error: Error<Rule>, source: &SourceContext) -> NomenError {
    let span: Span = match error.location {
        InputLocation::Pos(pos) => pos..pos,
        InputLocation::Span((start, end)) => start..end,
    };

    let error = error.renamed_rules(rule_label);
    let message = error.variant.message().into_owned();

    let help = if message.contains("end of input") {
        "only a single expression is accepted; remove the trailing input"
    } else if span.start >= source.content.len() {
        "the expression ends too early; check for an unclosed bracket or quote"
    } else {
        "nomen accepts a single JavaScript expression or function declaration"
    };

    source
        .report(ErrorKind::Syntax { message }, span.into())
        .with_help(help)
}
