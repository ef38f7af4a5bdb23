//! Tree-walking evaluator.
//!
//! Evaluation is a pure function of the node: there are no variables and no
//! environment. A list is a call; its head must be a symbol naming a
//! [`Builtin`], and its remaining children are evaluated left to right. The
//! first error stops evaluation and is returned as is, so later siblings are
//! never evaluated.

use crate::builtin::Builtin;
use crate::error::{EvalError, EvalResult};
use crate::value::Value;
use yalisp_log::{debug, trace};
use yalisp_syntax::ast::Node;
use yalisp_syntax::span::{Span, Spanned};

/// Evaluates `node` to a value.
///
/// # Examples
///
/// ```
/// use yalisp_interpreter::{eval, Value};
/// use yalisp_syntax::parse;
///
/// let node = parse("(+ (+ 1 2) (- 5 1))", &mut 0).unwrap();
/// assert_eq!(eval(&node), Ok(Value::Int(7)));
/// ```
///
/// # Errors
///
/// Returns an [`EvalError`] for bare symbols, empty lists, lists whose head
/// is not a known operator symbol, and operator arguments of the wrong kind
/// or number.
pub fn eval(node: &Node) -> EvalResult<Value> {
    trace!("{} at {}", node.kind_name(), node.span());
    match node {
        Node::IntLiteral { value, .. } => Ok(Value::Int(*value)),
        Node::StringLiteral { value, .. } => Ok(Value::Str(value.clone())),
        Node::Symbol { name, span } => Err(EvalError::BareSymbolNotEvaluable {
            name: name.clone(),
            span: *span,
        }),
        Node::List { items, span } => eval_call(items, *span),
    }
}

/// Evaluates a list as an operator call.
fn eval_call(items: &[Node], span: Span) -> EvalResult<Value> {
    let Some((head, args)) = items.split_first() else {
        return Err(EvalError::EmptyListNotEvaluable { span });
    };

    let Some(name) = head.as_symbol() else {
        return Err(EvalError::OperatorMustBeSymbol { span: head.span() });
    };

    let operator = Builtin::from_name(name).ok_or_else(|| EvalError::UnknownOperator {
        name: name.to_string(),
        span: head.span(),
    })?;

    debug!("applying {operator} to {} arguments", args.len());
    apply(operator, args, span)
}

/// Applies a built-in to its unevaluated arguments.
fn apply(operator: Builtin, args: &[Node], span: Span) -> EvalResult<Value> {
    if args.len() < operator.min_args() {
        return Err(EvalError::ArityError {
            operator,
            found: args.len(),
            span,
        });
    }

    match operator {
        Builtin::Add => args
            .iter()
            .try_fold(0_i64, |sum, arg| Ok(sum.wrapping_add(eval_int(operator, arg)?)))
            .map(Value::Int),
        // The first argument is the running total; the arity check above
        // guarantees there is one.
        Builtin::Sub => args
            .iter()
            .enumerate()
            .try_fold(0_i64, |diff, (idx, arg)| {
                let value = eval_int(operator, arg)?;
                Ok(if idx == 0 {
                    value
                } else {
                    diff.wrapping_sub(value)
                })
            })
            .map(Value::Int),
        Builtin::Concat => args
            .iter()
            .try_fold(String::new(), |mut joined, arg| {
                joined.push_str(&eval_str(operator, arg)?);
                Ok(joined)
            })
            .map(Value::Str),
    }
}

/// Evaluates an argument that must be an integer.
fn eval_int(operator: Builtin, arg: &Node) -> EvalResult<i64> {
    match eval(arg)? {
        Value::Int(value) => Ok(value),
        other => Err(EvalError::TypeMismatch {
            operator,
            found: other.kind(),
            span: arg.span(),
        }),
    }
}

/// Evaluates an argument that must be a string.
fn eval_str(operator: Builtin, arg: &Node) -> EvalResult<String> {
    match eval(arg)? {
        Value::Str(value) => Ok(value),
        other => Err(EvalError::TypeMismatch {
            operator,
            found: other.kind(),
            span: arg.span(),
        }),
    }
}
