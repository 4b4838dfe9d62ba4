use crate::types::{Date, Price, Timestamp};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

///
/// Value
///
/// Dynamic field value used in filter clauses and ordering slots. Carries
/// exactly the scalar families the freight domain queries over; `Null` is
/// an explicit value (an unconstrained criteria column), distinct from a
/// field that does not exist on the row.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Value {
    Null,
    Int(i64),
    Nat(u64),
    Decimal(Price),
    Date(Date),
    Timestamp(Timestamp),
    Text(String),
    List(Vec<Value>),
}

impl Value {
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

/// Compare two values within the same scalar family.
///
/// Returns `None` for cross-family comparisons, `Null` operands, and lists;
/// callers decide what an undefined comparison means (filter evaluation
/// treats it as a non-match, ordering sorts nulls first explicitly).
#[must_use]
pub fn canonical_cmp(left: &Value, right: &Value) -> Option<Ordering> {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
        (Value::Nat(a), Value::Nat(b)) => Some(a.cmp(b)),
        (Value::Decimal(a), Value::Decimal(b)) => Some(a.cmp(b)),
        (Value::Date(a), Value::Date(b)) => Some(a.cmp(b)),
        (Value::Timestamp(a), Value::Timestamp(b)) => Some(a.cmp(b)),
        (Value::Text(a), Value::Text(b)) => Some(a.cmp(b)),
        _ => None,
    }
}

///
/// FieldValue
///
/// Conversion into a `Value`, so filter builders accept plain domain types.
///

pub trait FieldValue {
    fn to_value(self) -> Value;
}

impl FieldValue for Value {
    fn to_value(self) -> Value {
        self
    }
}

impl FieldValue for i64 {
    fn to_value(self) -> Value {
        Value::Int(self)
    }
}

impl FieldValue for u64 {
    fn to_value(self) -> Value {
        Value::Nat(self)
    }
}

impl FieldValue for Price {
    fn to_value(self) -> Value {
        Value::Decimal(self)
    }
}

impl FieldValue for Date {
    fn to_value(self) -> Value {
        Value::Date(self)
    }
}

impl FieldValue for Timestamp {
    fn to_value(self) -> Value {
        Value::Timestamp(self)
    }
}

impl FieldValue for String {
    fn to_value(self) -> Value {
        Value::Text(self)
    }
}

impl FieldValue for &str {
    fn to_value(self) -> Value {
        Value::Text(self.to_string())
    }
}

impl FieldValue for Vec<Value> {
    fn to_value(self) -> Value {
        Value::List(self)
    }
}

/// Presence checks carry no literal.
impl FieldValue for () {
    fn to_value(self) -> Value {
        Value::Null
    }
}

impl<T: FieldValue> FieldValue for Option<T> {
    fn to_value(self) -> Value {
        match self {
            Some(value) => value.to_value(),
            None => Value::Null,
        }
    }
}

///
/// FieldValues
///
/// Row-like access to entity fields by name. Decouples filter evaluation
/// and ordering from concrete entity types; `None` means the field does not
/// exist on this entity (as opposed to `Some(Value::Null)` for an
/// unconstrained column).
///

pub trait FieldValues {
    fn get_value(&self, field: &str) -> Option<Value>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cross_family_comparison_is_undefined() {
        assert_eq!(
            canonical_cmp(&Value::Int(1), &Value::Nat(1)),
            None
        );
        assert_eq!(
            canonical_cmp(&Value::Null, &Value::Int(1)),
            None
        );
        assert_eq!(
            canonical_cmp(&Value::List(vec![]), &Value::List(vec![])),
            None
        );
    }

    #[test]
    fn same_family_comparison_is_total() {
        assert_eq!(
            canonical_cmp(&Value::Int(1), &Value::Int(2)),
            Some(Ordering::Less)
        );
        assert_eq!(
            canonical_cmp(
                &Value::Decimal(Price::from_int(300)),
                &Value::Decimal(Price::from_int(300))
            ),
            Some(Ordering::Equal)
        );
    }

    #[test]
    fn option_lowers_to_null() {
        assert_eq!(None::<i64>.to_value(), Value::Null);
        assert_eq!(Some(5i64).to_value(), Value::Int(5));
    }
}
