use crate::{
    error::ValidationError,
    model::UserId,
    types::{Date, Price, Timestamp},
    value::{FieldValue, FieldValues, Value},
};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

///
/// FreightSearchId
///

#[derive(
    Clone, Copy, Debug, Default, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[repr(transparent)]
pub struct FreightSearchId(u64);

impl FreightSearchId {
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl Display for FreightSearchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FieldValue for FreightSearchId {
    fn to_value(self) -> Value {
        Value::Nat(self.0)
    }
}

///
/// SearchCriteria
///
/// The six optional constraint fields. Absence means unconstrained; there
/// are no sentinel values and no defaulting here. `min_price <= max_price`
/// (and `from <= to` per date window) when both sides are present is a
/// caller precondition, re-checked defensively by the predicate compiler.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct SearchCriteria {
    pub pickup_code: Option<i64>,
    pub delivery_code: Option<i64>,
    pub min_price: Option<Price>,
    pub max_price: Option<Price>,
    pub pickup_date_from: Option<Date>,
    pub pickup_date_to: Option<Date>,
    pub delivery_date_from: Option<Date>,
    pub delivery_date_to: Option<Date>,
}

impl SearchCriteria {
    /// Parse a raw payload, rejecting malformed prices and dates.
    pub fn parse(input: CriteriaInput) -> Result<Self, ValidationError> {
        let parse_price = |field: &Option<String>| -> Result<Option<Price>, ValidationError> {
            field.as_deref().map(Price::parse).transpose()
        };
        let parse_date = |field: &Option<String>| -> Result<Option<Date>, ValidationError> {
            field.as_deref().map(Date::parse).transpose()
        };

        Ok(Self {
            pickup_code: input.pickup_code,
            delivery_code: input.delivery_code,
            min_price: parse_price(&input.min_price)?,
            max_price: parse_price(&input.max_price)?,
            pickup_date_from: parse_date(&input.pickup_date_from)?,
            pickup_date_to: parse_date(&input.pickup_date_to)?,
            delivery_date_from: parse_date(&input.delivery_date_from)?,
            delivery_date_to: parse_date(&input.delivery_date_to)?,
        })
    }

    /// True when every field is unconstrained (matches any freight).
    #[must_use]
    pub const fn is_unconstrained(&self) -> bool {
        self.pickup_code.is_none()
            && self.delivery_code.is_none()
            && self.min_price.is_none()
            && self.max_price.is_none()
            && self.pickup_date_from.is_none()
            && self.pickup_date_to.is_none()
            && self.delivery_date_from.is_none()
            && self.delivery_date_to.is_none()
    }
}

///
/// CriteriaInput
///
/// Raw criteria payload from a transport collaborator. Omitted fields stay
/// `None` and mean "any"; present fields must parse or the whole payload is
/// rejected.
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct CriteriaInput {
    pub pickup_code: Option<i64>,
    pub delivery_code: Option<i64>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub pickup_date_from: Option<String>,
    pub pickup_date_to: Option<String>,
    pub delivery_date_from: Option<String>,
    pub delivery_date_to: Option<String>,
}

///
/// FreightSearch
///
/// A saved search. Mutable only via replacement; the matching core treats
/// it as read-only.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct FreightSearch {
    pub id: FreightSearchId,
    pub user_id: UserId,
    pub created_at: Timestamp,
    pub criteria: SearchCriteria,
}

impl FreightSearch {
    pub const ID: &'static str = "id";
    pub const USER_ID: &'static str = "user_id";
    pub const CREATED_AT: &'static str = "created_at";
    pub const PICKUP_CODE: &'static str = "pickup_code";
    pub const DELIVERY_CODE: &'static str = "delivery_code";
    pub const MIN_PRICE: &'static str = "min_price";
    pub const MAX_PRICE: &'static str = "max_price";
    pub const PICKUP_DATE_FROM: &'static str = "pickup_date_from";
    pub const PICKUP_DATE_TO: &'static str = "pickup_date_to";
    pub const DELIVERY_DATE_FROM: &'static str = "delivery_date_from";
    pub const DELIVERY_DATE_TO: &'static str = "delivery_date_to";
}

impl FieldValues for FreightSearch {
    fn get_value(&self, field: &str) -> Option<Value> {
        let criteria = &self.criteria;

        match field {
            Self::ID => Some(self.id.to_value()),
            Self::USER_ID => Some(self.user_id.to_value()),
            Self::CREATED_AT => Some(self.created_at.to_value()),
            Self::PICKUP_CODE => Some(criteria.pickup_code.to_value()),
            Self::DELIVERY_CODE => Some(criteria.delivery_code.to_value()),
            Self::MIN_PRICE => Some(criteria.min_price.to_value()),
            Self::MAX_PRICE => Some(criteria.max_price.to_value()),
            Self::PICKUP_DATE_FROM => Some(criteria.pickup_date_from.to_value()),
            Self::PICKUP_DATE_TO => Some(criteria.pickup_date_to.to_value()),
            Self::DELIVERY_DATE_FROM => Some(criteria.delivery_date_from.to_value()),
            Self::DELIVERY_DATE_TO => Some(criteria.delivery_date_to.to_value()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_fully_unconstrained() {
        let criteria = SearchCriteria::parse(CriteriaInput::default()).unwrap();

        assert!(criteria.is_unconstrained());
    }

    #[test]
    fn parses_present_fields_only() {
        let criteria = SearchCriteria::parse(CriteriaInput {
            pickup_code: Some(10100),
            min_price: Some("200".to_string()),
            pickup_date_from: Some("2021-12-30".to_string()),
            ..CriteriaInput::default()
        })
        .unwrap();

        assert_eq!(criteria.pickup_code, Some(10100));
        assert_eq!(criteria.min_price, Some(Price::from_int(200)));
        assert_eq!(
            criteria.pickup_date_from,
            Some(Date::parse("2021-12-30").unwrap())
        );
        assert_eq!(criteria.delivery_code, None);
        assert_eq!(criteria.max_price, None);
    }

    #[test]
    fn rejects_malformed_optional_fields() {
        let bad = SearchCriteria::parse(CriteriaInput {
            max_price: Some("lots".to_string()),
            ..CriteriaInput::default()
        });

        assert!(matches!(
            bad,
            Err(ValidationError::MalformedPrice { .. })
        ));
    }

    #[test]
    fn unconstrained_columns_read_as_null() {
        let search = FreightSearch {
            id: FreightSearchId::new(1),
            user_id: UserId::new(1),
            created_at: Timestamp::EPOCH,
            criteria: SearchCriteria {
                pickup_code: Some(10100),
                ..SearchCriteria::default()
            },
        };

        assert_eq!(
            search.get_value(FreightSearch::PICKUP_CODE),
            Some(Value::Int(10100))
        );
        assert_eq!(
            search.get_value(FreightSearch::DELIVERY_CODE),
            Some(Value::Null)
        );
        assert_eq!(search.get_value("no_such_field"), None);
    }
}
