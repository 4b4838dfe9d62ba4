use crate::value::{FieldValue, Value};
use serde::{Deserialize, Serialize};
use std::ops::{BitAnd, BitOr};

///
/// Cmp
///
/// Comparison operators a filter clause may carry. Every operator is
/// answerable by an equality-or-range index lookup on its column; there is
/// deliberately no operator that forces a computed or function-wrapped
/// column.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Cmp {
    Eq,
    Ne,
    Lt,
    Lte,
    Gt,
    Gte,
    /// Membership test. A `Null` member matches a null field, so
    /// `IN (v, NULL)` expresses "bound to v OR unconstrained" as a single
    /// indexable clause. SQL collaborators lower this clause to
    /// `col IS NULL OR col = v` (plain SQL `IN` skips nulls).
    In,
    IsNull,
    IsNotNull,
}

///
/// FilterClause
///
/// One column compared against one literal. The only leaf a filter tree
/// can contain, which is what keeps every conjunct index-friendly.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct FilterClause {
    pub field: String,
    pub cmp: Cmp,
    pub value: Value,
}

impl FilterClause {
    pub fn new(field: impl Into<String>, cmp: Cmp, value: impl FieldValue) -> Self {
        Self {
            field: field.into(),
            cmp,
            value: value.to_value(),
        }
    }
}

///
/// FilterExpr
///
/// Serializable boolean expression tree over entity columns.
///
/// Expressions can be:
/// - `True` or `False` constants
/// - Single clauses comparing a field with a value
/// - Composite expressions: `And`, `Or`, and negation `Not`.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum FilterExpr {
    #[default]
    True,
    False,
    Clause(FilterClause),
    And(Vec<Self>),
    Or(Vec<Self>),
    Not(Box<Self>),
}

impl FilterExpr {
    /// Create a single clause: `field cmp value`.
    pub fn clause(field: impl Into<String>, cmp: Cmp, value: impl FieldValue) -> Self {
        Self::Clause(FilterClause::new(field, cmp, value))
    }

    // --- Equality ---

    pub fn eq(field: impl Into<String>, value: impl FieldValue) -> Self {
        Self::clause(field, Cmp::Eq, value)
    }

    pub fn ne(field: impl Into<String>, value: impl FieldValue) -> Self {
        Self::clause(field, Cmp::Ne, value)
    }

    // --- Ordering ---

    pub fn lt(field: impl Into<String>, value: impl FieldValue) -> Self {
        Self::clause(field, Cmp::Lt, value)
    }

    pub fn lte(field: impl Into<String>, value: impl FieldValue) -> Self {
        Self::clause(field, Cmp::Lte, value)
    }

    pub fn gt(field: impl Into<String>, value: impl FieldValue) -> Self {
        Self::clause(field, Cmp::Gt, value)
    }

    pub fn gte(field: impl Into<String>, value: impl FieldValue) -> Self {
        Self::clause(field, Cmp::Gte, value)
    }

    // --- Presence ---

    pub fn is_null(field: impl Into<String>) -> Self {
        Self::clause(field, Cmp::IsNull, ())
    }

    pub fn is_not_null(field: impl Into<String>) -> Self {
        Self::clause(field, Cmp::IsNotNull, ())
    }

    // --- Membership ---

    pub fn in_iter<I>(field: impl Into<String>, vals: I) -> Self
    where
        I: IntoIterator,
        I::Item: FieldValue,
    {
        Self::clause(
            field,
            Cmp::In,
            vals.into_iter().map(FieldValue::to_value).collect::<Vec<_>>(),
        )
    }

    /// Combine two expressions into an `And` expression.
    ///
    /// This flattens nested `And`s to avoid deep nesting (e.g., `(a AND b)
    /// AND c` becomes `AND[a,b,c]`).
    #[must_use]
    pub fn and(self, other: Self) -> Self {
        match (self, other) {
            (Self::And(mut a), Self::And(mut b)) => {
                a.append(&mut b);
                Self::And(a)
            }
            (Self::And(mut a), b) => {
                a.push(b);
                Self::And(a)
            }
            (a, Self::And(mut b)) => {
                let mut list = vec![a];
                list.append(&mut b);
                Self::And(list)
            }
            (a, b) => Self::And(vec![a, b]),
        }
    }

    /// Combine two expressions into an `Or` expression, flattening nested
    /// `Or`s similarly to `and`.
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        match (self, other) {
            (Self::Or(mut a), Self::Or(mut b)) => {
                a.append(&mut b);
                Self::Or(a)
            }
            (Self::Or(mut a), b) => {
                a.push(b);
                Self::Or(a)
            }
            (a, Self::Or(mut b)) => {
                let mut list = vec![a];
                list.append(&mut b);
                Self::Or(list)
            }
            (a, b) => Self::Or(vec![a, b]),
        }
    }

    #[must_use]
    pub fn and_option(self, other: Option<Self>) -> Self {
        match other {
            Some(f) => self.and(f),
            None => self,
        }
    }

    /// Negate this expression.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Self {
        Self::Not(Box::new(self))
    }
}

impl BitAnd for FilterExpr {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.and(rhs)
    }
}

impl BitOr for FilterExpr {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.or(rhs)
    }
}
