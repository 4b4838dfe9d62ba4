use crate::{
    error::ValidationError,
    types::{Date, Price},
    value::{FieldValue, FieldValues, Value},
};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

///
/// FreightId
///
/// Unique, monotonically assigned by the storage collaborator.
///

#[derive(
    Clone, Copy, Debug, Default, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[repr(transparent)]
pub struct FreightId(u64);

impl FreightId {
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl Display for FreightId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FieldValue for FreightId {
    fn to_value(self) -> Value {
        Value::Nat(self.0)
    }
}

///
/// Freight
///
/// Immutable once created. `delivery_date >= pickup_date` is assumed valid
/// on input; the matching core never re-checks it.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Freight {
    pub id: FreightId,
    pub price: Price,
    pub pickup_code: i64,
    pub delivery_code: i64,
    pub pickup_date: Date,
    pub delivery_date: Date,
}

impl Freight {
    pub const ID: &'static str = "id";
    pub const PRICE: &'static str = "price";
    pub const PICKUP_CODE: &'static str = "pickup_code";
    pub const DELIVERY_CODE: &'static str = "delivery_code";
    pub const PICKUP_DATE: &'static str = "pickup_date";
    pub const DELIVERY_DATE: &'static str = "delivery_date";
}

impl FieldValues for Freight {
    fn get_value(&self, field: &str) -> Option<Value> {
        match field {
            Self::ID => Some(self.id.to_value()),
            Self::PRICE => Some(self.price.to_value()),
            Self::PICKUP_CODE => Some(self.pickup_code.to_value()),
            Self::DELIVERY_CODE => Some(self.delivery_code.to_value()),
            Self::PICKUP_DATE => Some(self.pickup_date.to_value()),
            Self::DELIVERY_DATE => Some(self.delivery_date.to_value()),
            _ => None,
        }
    }
}

///
/// FreightInput
///
/// Raw creation payload as it arrives from a transport collaborator.
/// Price and dates are strings until `FreightDraft::parse` accepts them.
///

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct FreightInput {
    pub price: String,
    pub pickup_code: i64,
    pub delivery_code: i64,
    pub pickup_date: String,
    pub delivery_date: String,
}

///
/// FreightDraft
///
/// Validated freight attributes, ready for the insert-only store path.
/// The id is assigned by the store, never by the caller.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FreightDraft {
    pub price: Price,
    pub pickup_code: i64,
    pub delivery_code: i64,
    pub pickup_date: Date,
    pub delivery_date: Date,
}

impl FreightDraft {
    pub fn parse(input: FreightInput) -> Result<Self, ValidationError> {
        Ok(Self {
            price: Price::parse(&input.price)?,
            pickup_code: input.pickup_code,
            delivery_code: input.delivery_code,
            pickup_date: Date::parse(&input.pickup_date)?,
            delivery_date: Date::parse(&input.delivery_date)?,
        })
    }
}
