use crate::{
    filter::{Cmp, FilterClause, FilterExpr},
    value::{FieldValues, Value, canonical_cmp},
};
use std::cmp::Ordering;

/// Evaluate a filter expression against a single row.
///
/// Pure runtime evaluation: no schema access, no index logic, no
/// validation. Any comparison that is undefined (missing field,
/// cross-family literal) evaluates to `false`, never to an error.
#[must_use]
pub fn eval<R: FieldValues + ?Sized>(row: &R, expr: &FilterExpr) -> bool {
    match expr {
        FilterExpr::True => true,
        FilterExpr::False => false,

        FilterExpr::And(children) => children.iter().all(|child| eval(row, child)),
        FilterExpr::Or(children) => children.iter().any(|child| eval(row, child)),
        FilterExpr::Not(inner) => !eval(row, inner),

        FilterExpr::Clause(clause) => eval_clause(row, clause),
    }
}

// Evaluate a single clause against a row.
fn eval_clause<R: FieldValues + ?Sized>(row: &R, clause: &FilterClause) -> bool {
    let Some(actual) = row.get_value(&clause.field) else {
        // Missing field: only falsifiable, and not "null".
        return false;
    };

    match clause.cmp {
        Cmp::IsNull => actual.is_null(),
        Cmp::IsNotNull => !actual.is_null(),

        Cmp::Eq => value_eq(&actual, &clause.value),
        Cmp::Ne => {
            // A null field is not comparable, so Ne does not match it.
            !actual.is_null() && !clause.value.is_null() && !value_eq(&actual, &clause.value)
        }

        Cmp::Lt => ordering_matches(&actual, &clause.value, Ordering::is_lt),
        Cmp::Lte => ordering_matches(&actual, &clause.value, Ordering::is_le),
        Cmp::Gt => ordering_matches(&actual, &clause.value, Ordering::is_gt),
        Cmp::Gte => ordering_matches(&actual, &clause.value, Ordering::is_ge),

        Cmp::In => match &clause.value {
            Value::List(members) => members.iter().any(|member| value_eq(&actual, member)),
            _ => false,
        },
    }
}

// Equality under clause semantics: Null equals Null (this is what lets
// `IN (v, NULL)` stand for "bound to v OR unconstrained").
fn value_eq(actual: &Value, literal: &Value) -> bool {
    match (actual, literal) {
        (Value::Null, Value::Null) => true,
        _ => canonical_cmp(actual, literal) == Some(Ordering::Equal),
    }
}

fn ordering_matches(actual: &Value, literal: &Value, test: impl Fn(Ordering) -> bool) -> bool {
    canonical_cmp(actual, literal).is_some_and(test)
}
