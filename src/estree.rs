//! ESTree front-end.
//!
//! Converts an ESTree node, the JSON AST produced by esprima, acorn, and
//! friends, into an [`Expr`]. `Program` and `ExpressionStatement` wrappers
//! are unwrapped, so the output of `esprima.parse("foo.bar")` can be passed
//! straight in.
//!
//! Unknown node types are reported as unsupported rather than ignored, and a
//! node missing a field its kind requires is rejected as malformed.

use serde_json::{Map, Value};

use crate::ast::builder::*;
use crate::ast::{BinaryOperator, Expr, LiteralValue, LogicalOperator, UnaryOperator};
use crate::errors::{ErrorKind, NomenError, SourceContext};

/// Parses ESTree JSON text.
pub fn from_json_str(text: &str) -> Result<Expr, NomenError> {
    let value: Value = serde_json::from_str(text).map_err(|e| {
        let offset = line_column_offset(text, e.line(), e.column());
        SourceContext::from_file("<estree>", text).report(
            ErrorKind::Syntax {
                message: format!("invalid JSON: {e}"),
            },
            (offset..offset).into(),
        )
    })?;
    from_value(&value)
}

/// Converts an already-parsed ESTree node.
pub fn from_value(value: &Value) -> Result<Expr, NomenError> {
    let expr = Node::new(value)?.to_expr()?;
    log::debug!("loaded {} ({} nodes) from ESTree", expr.kind(), expr.node_count());
    Ok(expr)
}

/// An ESTree object together with its `type`, for error reporting.
struct Node<'v> {
    kind: &'v str,
    fields: &'v Map<String, Value>,
}

impl<'v> Node<'v> {
    fn new(value: &'v Value) -> Result<Self, NomenError> {
        let fields = value.as_object().ok_or_else(|| malformed("node", "type"))?;
        let kind = fields
            .get("type")
            .and_then(Value::as_str)
            .ok_or_else(|| malformed("node", "type"))?;
        Ok(Self { kind, fields })
    }

    fn field(&self, name: &str) -> Result<&'v Value, NomenError> {
        match self.fields.get(name) {
            Some(Value::Null) | None => Err(malformed(self.kind, name)),
            Some(value) => Ok(value),
        }
    }

    fn child(&self, name: &str) -> Result<Expr, NomenError> {
        Node::new(self.field(name)?)
            .map_err(|_| malformed(self.kind, name))?
            .to_expr()
    }

    fn text(&self, name: &str) -> Result<&'v str, NomenError> {
        self.field(name)?
            .as_str()
            .ok_or_else(|| malformed(self.kind, name))
    }

    fn operator(&self) -> Result<&'v str, NomenError> {
        self.text("operator")
    }

    fn to_expr(&self) -> Result<Expr, NomenError> {
        match self.kind {
            "Program" => {
                let first = self
                    .field("body")?
                    .as_array()
                    .and_then(|body| body.first())
                    .ok_or_else(|| malformed(self.kind, "body"))?;
                Node::new(first)?.to_expr()
            }
            "ExpressionStatement" | "ParenthesizedExpression" | "ChainExpression" => {
                self.child("expression")
            }

            "Identifier" => Ok(ident(self.text("name")?)),
            "Literal" => Ok(Expr::Literal(self.literal()?)),
            "ThisExpression" => Ok(this()),
            "ObjectExpression" => Ok(object()),
            "ArrayExpression" => Ok(array()),

            "MemberExpression" => Ok(member(self.child("object")?, self.child("property")?)),
            "CallExpression" => Ok(call(self.child("callee")?)),
            "NewExpression" => Ok(new(self.child("callee")?)),

            "FunctionExpression" => Ok(Expr::FunctionExpr {
                name: self.function_name()?,
            }),
            "FunctionDeclaration" => Ok(Expr::FunctionDecl {
                name: self.function_name()?,
            }),

            "UnaryExpression" => {
                let operator = self.operator()?;
                let operator = UnaryOperator::from_symbol(operator)
                    .ok_or_else(|| unknown_operator(self.kind, operator))?;
                Ok(unary(operator, self.child("argument")?))
            }
            "BinaryExpression" => {
                let operator = self.operator()?;
                let operator = BinaryOperator::from_symbol(operator)
                    .ok_or_else(|| unknown_operator(self.kind, operator))?;
                Ok(binary(operator, self.child("left")?, self.child("right")?))
            }
            "LogicalExpression" => {
                let operator = self.operator()?;
                let operator = LogicalOperator::from_symbol(operator)
                    .ok_or_else(|| unknown_operator(self.kind, operator))?;
                Ok(logical(operator, self.child("left")?, self.child("right")?))
            }
            "AssignmentExpression" => Ok(assign(self.child("left")?, self.child("right")?)),
            "UpdateExpression" => {
                let prefix = self
                    .field("prefix")?
                    .as_bool()
                    .ok_or_else(|| malformed(self.kind, "prefix"))?;
                Ok(update(prefix, self.child("argument")?))
            }
            "ConditionalExpression" => Ok(conditional(
                self.child("consequent")?,
                self.child("alternate")?,
            )),

            other => Err(NomenError::bare(ErrorKind::UnsupportedKind {
                kind: other.to_string(),
            })),
        }
    }

    fn function_name(&self) -> Result<Option<String>, NomenError> {
        match self.fields.get("id") {
            None | Some(Value::Null) => Ok(None),
            Some(id) => {
                let name = id
                    .get("name")
                    .and_then(Value::as_str)
                    .ok_or_else(|| malformed(self.kind, "id"))?;
                Ok(Some(name.to_string()))
            }
        }
    }

    /// `regex` and `bigint` annotations win over `value`, which serializers
    /// leave as `{}` or `null` for values JSON cannot hold.
    fn literal(&self) -> Result<LiteralValue, NomenError> {
        if let Some(regex) = self.fields.get("regex").filter(|r| !r.is_null()) {
            let part = |name: &str| {
                regex
                    .get(name)
                    .and_then(Value::as_str)
                    .map(str::to_string)
                    .ok_or_else(|| malformed(self.kind, "regex"))
            };
            return Ok(LiteralValue::Regex {
                pattern: part("pattern")?,
                flags: part("flags")?,
            });
        }

        if let Some(digits) = self.fields.get("bigint").and_then(Value::as_str) {
            let value = digits.parse::<f64>().map_err(|_| {
                NomenError::bare(ErrorKind::InvalidLiteral {
                    literal_type: "bigint".into(),
                    value: digits.into(),
                })
            })?;
            return Ok(LiteralValue::Number(value));
        }

        Ok(match self.fields.get("value") {
            None => LiteralValue::Absent,
            Some(Value::Null) => LiteralValue::Null,
            Some(Value::Bool(flag)) => LiteralValue::Boolean(*flag),
            Some(Value::String(text)) => LiteralValue::String(text.clone()),
            Some(Value::Number(number)) => number
                .as_f64()
                .map(LiteralValue::Number)
                .unwrap_or(LiteralValue::Absent),
            Some(Value::Array(_) | Value::Object(_)) => LiteralValue::Absent,
        })
    }
}

fn malformed(kind: &str, field: &str) -> NomenError {
    NomenError::bare(ErrorKind::MalformedNode {
        kind: kind.into(),
        field: field.into(),
    })
}

fn unknown_operator(kind: &str, operator: &str) -> NomenError {
    NomenError::bare(ErrorKind::UnknownOperator {
        kind: kind.into(),
        operator: operator.into(),
    })
}

/// Byte offset of a 1-based line and column, clamped to the text.
fn line_column_offset(text: &str, line: usize, column: usize) -> usize {
    let line_start: usize = text
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum();
    (line_start + column.saturating_sub(1)).min(text.len())
}
