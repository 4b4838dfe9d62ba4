use crate::{
    MAX_PAGE_SIZE,
    error::ValidationError,
    filter::FilterExpr,
    model::{FreightSearch, FreightSearchId},
    types::Timestamp,
    value::{FieldValues, Value, canonical_cmp},
};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

///
/// OrderDirection
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum OrderDirection {
    Asc,
    Desc,
}

///
/// OrderSpec
///
/// Deterministic ordering over rows. The final field must be the unique id
/// so the order is total: an order on a non-unique field alone would make
/// paging non-deterministic, and is rejected rather than silently repaired.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct OrderSpec {
    pub fields: Vec<(String, OrderDirection)>,
}

impl OrderSpec {
    /// The canonical match-result order: creation order, id tie-break.
    #[must_use]
    pub fn creation_order() -> Self {
        Self {
            fields: vec![
                (FreightSearch::CREATED_AT.to_string(), OrderDirection::Asc),
                (FreightSearch::ID.to_string(), OrderDirection::Asc),
            ],
        }
    }

    /// Reject an order specification that does not end with the unique id
    /// field as tie-break.
    pub fn ensure_total(&self, unique_field: &'static str) -> Result<(), ValidationError> {
        let tied = self
            .fields
            .last()
            .is_some_and(|(field, _)| field == unique_field);

        if tied {
            Ok(())
        } else {
            Err(ValidationError::UntiedOrder { unique_field })
        }
    }

    /// Compare two rows under this spec, returning the first non-equal
    /// field ordering. Absent values (null or missing) sort before present
    /// ones in ascending order.
    pub fn compare<R: FieldValues>(&self, left: &R, right: &R) -> Ordering {
        for (field, direction) in &self.fields {
            let ordering = compare_slots(left.get_value(field), right.get_value(field));
            let ordering = apply_direction(ordering, *direction);

            if ordering != Ordering::Equal {
                return ordering;
            }
        }

        Ordering::Equal
    }
}

fn compare_slots(left: Option<Value>, right: Option<Value>) -> Ordering {
    let absent = |slot: &Option<Value>| match slot {
        None | Some(Value::Null) => true,
        Some(_) => false,
    };

    match (absent(&left), absent(&right)) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => {
            // Cross-family values never occur within one column; treat an
            // undefined comparison as a tie and let the tie-break decide.
            match (left, right) {
                (Some(l), Some(r)) => canonical_cmp(&l, &r).unwrap_or(Ordering::Equal),
                _ => Ordering::Equal,
            }
        }
    }
}

const fn apply_direction(ordering: Ordering, direction: OrderDirection) -> Ordering {
    match direction {
        OrderDirection::Asc => ordering,
        OrderDirection::Desc => ordering.reverse(),
    }
}

///
/// PageSpec
///
/// Validated `(limit, offset)` window. Out-of-range input is rejected with
/// `ValidationError`, never clamped. Offsets have no upper bound; deep
/// offsets make the storage collaborator scan and discard rows before the
/// window starts, which is the documented cost of offset paging.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PageSpec {
    limit: u32,
    offset: u64,
}

impl PageSpec {
    pub fn new(limit: i64, offset: i64) -> Result<Self, ValidationError> {
        if limit < 1 || limit > i64::from(MAX_PAGE_SIZE) {
            return Err(ValidationError::LimitOutOfRange {
                limit,
                max: MAX_PAGE_SIZE,
            });
        }
        if offset < 0 {
            return Err(ValidationError::OffsetOutOfRange { offset });
        }

        Ok(Self {
            limit: limit as u32,
            offset: offset as u64,
        })
    }

    #[must_use]
    pub const fn limit(self) -> u32 {
        self.limit
    }

    #[must_use]
    pub const fn offset(self) -> u64 {
        self.offset
    }

    /// Rows to request from storage: one past the page so `has_more` needs
    /// no second query.
    #[must_use]
    pub const fn fetch_limit(self) -> u32 {
        self.limit + 1
    }
}

///
/// Page
///
/// One slice of an ordered result set, plus whether rows exist past it.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub has_more: bool,
}

impl<T> Page<T> {
    /// Bound a `fetch_limit`-sized fetch down to the page: the probe row
    /// past `limit` only feeds `has_more` and is never returned.
    #[must_use]
    pub fn from_fetched(mut rows: Vec<T>, limit: u32) -> Self {
        let limit = limit as usize;
        let has_more = rows.len() > limit;
        rows.truncate(limit);

        Self {
            items: rows,
            has_more,
        }
    }
}

///
/// Cursor
///
/// Strict continuation boundary under the canonical `(created_at, id)`
/// order: the position of the last row a previous page returned. Additive
/// to offset paging — deep pages can continue from here without the
/// scan-and-discard cost.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Cursor {
    pub created_at: Timestamp,
    pub id: FreightSearchId,
}

impl Cursor {
    /// Position of the last row of a page, if any.
    #[must_use]
    pub fn after_row(row: &FreightSearch) -> Self {
        Self {
            created_at: row.created_at,
            id: row.id,
        }
    }

    /// Filter conjunct keeping only rows strictly after this boundary:
    /// `created_at > :ts OR (created_at = :ts AND id > :id)`.
    #[must_use]
    pub fn boundary_expr(&self) -> FilterExpr {
        FilterExpr::gt(FreightSearch::CREATED_AT, self.created_at).or(
            FilterExpr::eq(FreightSearch::CREATED_AT, self.created_at)
                .and(FilterExpr::gt(FreightSearch::ID, self.id)),
        )
    }
}
