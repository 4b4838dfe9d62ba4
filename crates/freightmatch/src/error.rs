use crate::{
    model::{FreightId, UserId},
    store::StoreError,
    types::{Date, Price},
};
use thiserror::Error as ThisError;

///
/// ErrorClass
///
/// Stable external classification of a request failure. Each class maps to
/// one transport-level status; the mapping itself belongs to the caller.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorClass {
    Validation,
    InvalidCriteria,
    NotFound,
    Internal,
}

///
/// ValidationError
///
/// Malformed or out-of-range caller input. Invalid input is always rejected,
/// never coerced (a non-positive limit is an error, not a clamp to 1).
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ValidationError {
    #[error("limit must be between 1 and {max}, got {limit}")]
    LimitOutOfRange { limit: i64, max: u32 },

    #[error("offset must be non-negative, got {offset}")]
    OffsetOutOfRange { offset: i64 },

    #[error("price '{input}' is not a valid decimal")]
    MalformedPrice { input: String },

    #[error("price '{input}' must be non-negative")]
    NegativePrice { input: String },

    #[error("date '{input}' is not a valid calendar date (expected YYYY-MM-DD)")]
    MalformedDate { input: String },

    /// An order specification that does not end with the unique id field
    /// cannot page deterministically. This is a programming error on the
    /// query path, not caller input.
    #[error("order specification must end with unique field '{unique_field}' as tie-break")]
    UntiedOrder { unique_field: &'static str },
}

impl ValidationError {
    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::UntiedOrder { .. } => ErrorClass::Internal,
            _ => ErrorClass::Validation,
        }
    }
}

///
/// InvalidCriteriaError
///
/// Internally inconsistent criteria bounds. Checked defensively at compile
/// time, independent of any validation the input path already performed.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum InvalidCriteriaError {
    #[error("min_price {min} exceeds max_price {max}")]
    PriceBounds { min: Price, max: Price },

    #[error("pickup_date_from {from} exceeds pickup_date_to {to}")]
    PickupWindow { from: Date, to: Date },

    #[error("delivery_date_from {from} exceeds delivery_date_to {to}")]
    DeliveryWindow { from: Date, to: Date },
}

///
/// NotFoundError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum NotFoundError {
    #[error("freight {0} not found")]
    Freight(FreightId),

    #[error("user {0} not found")]
    User(UserId),
}

///
/// Error
///
/// Top-level request error. All variants are terminal for the current
/// request; matching is deterministic and idempotent, so nothing here is
/// retried inside the core.
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Criteria(#[from] InvalidCriteriaError),

    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl Error {
    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::Validation(err) => err.class(),
            Self::Criteria(_) => ErrorClass::InvalidCriteria,
            Self::NotFound(_) => ErrorClass::NotFound,
            Self::Store(_) => ErrorClass::Internal,
        }
    }
}
