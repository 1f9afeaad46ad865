//! Curried building blocks for point-free pipelines.
//!
//! Every builtin is created with [`curry_n`], so each can be partially
//! applied: `prop("name")` is a function from records to their `name`
//! field, `filter(prop_eq("active", true))` is a function from lists to the
//! active elements, and so on.

use pointfree_types::{EvalError, Function, Result, Value};

use crate::curry::curry_n;

/// `identity(x) = x`
pub fn identity() -> Function {
    curry_n(1, "identity", |args| Ok(args[0].clone()))
}

/// `add(a, b) = a + b` over integers and reals.
pub fn add() -> Function {
    curry_n(2, "add", |args| {
        arithmetic("add", &args[0], &args[1], i64::checked_add, |a, b| a + b)
    })
}

/// `multiply(a, b) = a * b` over integers and reals.
pub fn multiply() -> Function {
    curry_n(2, "multiply", |args| {
        arithmetic("multiply", &args[0], &args[1], i64::checked_mul, |a, b| a * b)
    })
}

/// `inc(x) = x + 1`
pub fn inc() -> Function {
    curry_n(1, "inc", |args| {
        arithmetic("inc", &args[0], &Value::Integer(1), i64::checked_add, |a, b| a + b)
    })
}

/// `prop(key, record)` returns the field, or `Null` when it is absent.
pub fn prop() -> Function {
    curry_n(2, "prop", |args| {
        let key = expect_text(&args[0])?;
        let record = expect_record(&args[1])?;
        Ok(record.get(key).cloned().unwrap_or_default())
    })
}

/// `prop_eq(key, value, record)` tests a field for equality.
pub fn prop_eq() -> Function {
    curry_n(3, "prop_eq", |args| {
        let key = expect_text(&args[0])?;
        let record = expect_record(&args[2])?;
        Ok(Value::Boolean(record.get(key) == Some(&args[1])))
    })
}

/// `filter(predicate, list)` keeps the elements the predicate maps to `true`.
pub fn filter() -> Function {
    curry_n(2, "filter", |args| {
        let predicate = &args[0];
        let items = expect_list(&args[1])?;

        let mut kept = Vec::new();
        for item in items {
            let verdict = predicate.call(std::slice::from_ref(item))?;
            match verdict {
                Value::Boolean(true) => kept.push(item.clone()),
                Value::Boolean(false) => {}
                other => return Err(EvalError::type_mismatch("boolean", other.type_name())),
            }
        }
        Ok(Value::List(kept))
    })
}

/// `map(f, list)` applies `f` to every element.
pub fn map() -> Function {
    curry_n(2, "map", |args| {
        let f = &args[0];
        let items = expect_list(&args[1])?;
        items
            .iter()
            .map(|item| f.call(std::slice::from_ref(item)))
            .collect::<Result<Vec<_>>>()
            .map(Value::List)
    })
}

fn arithmetic(
    name: &str,
    a: &Value,
    b: &Value,
    int_op: fn(i64, i64) -> Option<i64>,
    real_op: fn(f64, f64) -> f64,
) -> Result<Value> {
    match (a, b) {
        (Value::Integer(x), Value::Integer(y)) => int_op(*x, *y)
            .map(Value::Integer)
            .ok_or_else(|| EvalError::failed(name, format!("integer overflow on {x} and {y}"))),
        _ => match (a.as_real(), b.as_real()) {
            (Some(x), Some(y)) => Ok(Value::Real(real_op(x, y))),
            (None, _) => Err(EvalError::type_mismatch("number", a.type_name())),
            (_, None) => Err(EvalError::type_mismatch("number", b.type_name())),
        },
    }
}

fn expect_text(value: &Value) -> Result<&str> {
    value
        .as_text()
        .ok_or_else(|| EvalError::type_mismatch("text", value.type_name()))
}

fn expect_record(value: &Value) -> Result<&std::collections::BTreeMap<String, Value>> {
    value
        .as_record()
        .ok_or_else(|| EvalError::type_mismatch("record", value.type_name()))
}

fn expect_list(value: &Value) -> Result<&[Value]> {
    value
        .as_list()
        .ok_or_else(|| EvalError::type_mismatch("list", value.type_name()))
}
