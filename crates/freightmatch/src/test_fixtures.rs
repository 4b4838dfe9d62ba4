//! Shared fixtures and proptest strategies for the matching core.

use crate::{
    model::{Freight, FreightId, FreightSearch, FreightSearchId, SearchCriteria, UserId},
    types::{Date, Price, Timestamp},
};
use proptest::{option, prelude::*};

pub(crate) fn date(input: &str) -> Date {
    Date::parse(input).unwrap()
}

pub(crate) fn freight(id: u64, price: u64, pickup_code: i64, delivery_code: i64) -> Freight {
    Freight {
        id: FreightId::new(id),
        price: Price::from_int(price),
        pickup_code,
        delivery_code,
        pickup_date: date("2022-01-01"),
        delivery_date: date("2022-01-02"),
    }
}

/// The freight most tests run against:
/// price 300, route 10100 -> 20100, pickup 2022-01-01, delivery 2022-01-02.
pub(crate) fn scenario_freight() -> Freight {
    freight(1, 300, 10100, 20100)
}

/// The matching criteria fixture: pickup 10100, any delivery, price in
/// [200, 400], pickup window [2021-12-30, 2022-01-02], any delivery window.
pub(crate) fn scenario_criteria() -> SearchCriteria {
    SearchCriteria {
        pickup_code: Some(10100),
        delivery_code: None,
        min_price: Some(Price::from_int(200)),
        max_price: Some(Price::from_int(400)),
        pickup_date_from: Some(date("2021-12-30")),
        pickup_date_to: Some(date("2022-01-02")),
        delivery_date_from: None,
        delivery_date_to: None,
    }
}

pub(crate) fn search_row(id: u64, created_secs: u64, criteria: SearchCriteria) -> FreightSearch {
    FreightSearch {
        id: FreightSearchId::new(id),
        user_id: UserId::new(1),
        created_at: Timestamp::from_seconds(created_secs),
        criteria,
    }
}

// Small overlapping pools so constrained and unconstrained cases, hits and
// misses, all occur with useful frequency.

fn any_code() -> impl Strategy<Value = i64> {
    prop_oneof![Just(10100), Just(10101), Just(20100), Just(20200)]
}

fn any_price() -> impl Strategy<Value = Price> {
    (0u64..=500).prop_map(Price::from_int)
}

fn any_date() -> impl Strategy<Value = Date> {
    (18980i32..=19020).prop_map(Date::from_days)
}

pub(crate) fn any_freight() -> impl Strategy<Value = Freight> {
    (
        1u64..=1000,
        any_price(),
        any_code(),
        any_code(),
        any_date(),
        any_date(),
    )
        .prop_map(|(id, price, pickup_code, delivery_code, a, b)| Freight {
            id: FreightId::new(id),
            price,
            pickup_code,
            delivery_code,
            pickup_date: a.min(b),
            delivery_date: a.max(b),
        })
}

/// Criteria with consistent bounds (price pairs and date windows are
/// emitted sorted), each field independently unconstrained half the time.
pub(crate) fn any_criteria() -> impl Strategy<Value = SearchCriteria> {
    let price_bounds = (option::of(any_price()), option::of(any_price())).prop_map(sort_bounds);
    let window = || (option::of(any_date()), option::of(any_date())).prop_map(sort_bounds);

    (
        option::of(any_code()),
        option::of(any_code()),
        price_bounds,
        window(),
        window(),
    )
        .prop_map(
            |(
                pickup_code,
                delivery_code,
                (min_price, max_price),
                (pickup_date_from, pickup_date_to),
                (delivery_date_from, delivery_date_to),
            )| SearchCriteria {
                pickup_code,
                delivery_code,
                min_price,
                max_price,
                pickup_date_from,
                pickup_date_to,
                delivery_date_from,
                delivery_date_to,
            },
        )
}

fn sort_bounds<T: Ord>((low, high): (Option<T>, Option<T>)) -> (Option<T>, Option<T>) {
    match (low, high) {
        (Some(a), Some(b)) if a > b => (Some(b), Some(a)),
        other => other,
    }
}
