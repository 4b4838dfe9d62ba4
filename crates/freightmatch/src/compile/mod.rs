
use crate::{
    error::InvalidCriteriaError,
    filter::FilterExpr,
    model::{Freight, FreightSearch, SearchCriteria},
    types::Date,
    value::Value,
};

///
/// Predicate Compiler
///
/// Single source of truth for match semantics. The match rule is a
/// conjunction of six independent sub-predicates, each vacuously true when
/// its criteria side is unconstrained:
///
/// 1. pickup_code     unbound OR equal
/// 2. delivery_code   unbound OR equal
/// 3. min_price       unbound OR <= freight.price
/// 4. max_price       unbound OR >= freight.price
/// 5. pickup window   each side unbound OR contains freight.pickup_date
/// 6. delivery window each side unbound OR contains freight.delivery_date
///
/// The rule is usable in three forms that must agree:
/// - `matches`: point evaluation of one criteria against one freight
/// - `freight_filter`: filter over freight rows for one fixed criteria
/// - `search_filter`: filter over criteria rows for one fixed freight
///   (the direction bulk matching actually runs in)
///

///
/// Bound
///
/// Compiler-level view of one optional constraint. An explicit tagged
/// variant rather than a raw `Option` so lowering sites spell out the
/// "unconstrained is a tautology, never a sentinel" rule.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Bound<T> {
    Unconstrained,
    To(T),
}

impl<T> From<Option<T>> for Bound<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Self::To(v),
            None => Self::Unconstrained,
        }
    }
}

/// Point form: does `criteria` accept `freight`?
#[must_use]
pub fn matches(criteria: &SearchCriteria, freight: &Freight) -> bool {
    criteria
        .pickup_code
        .is_none_or(|code| code == freight.pickup_code)
        && criteria
            .delivery_code
            .is_none_or(|code| code == freight.delivery_code)
        && criteria.min_price.is_none_or(|min| min <= freight.price)
        && criteria.max_price.is_none_or(|max| max >= freight.price)
        && window_contains(
            criteria.pickup_date_from,
            criteria.pickup_date_to,
            freight.pickup_date,
        )
        && window_contains(
            criteria.delivery_date_from,
            criteria.delivery_date_to,
            freight.delivery_date,
        )
}

fn window_contains(from: Option<Date>, to: Option<Date>, actual: Date) -> bool {
    from.is_none_or(|f| f <= actual) && to.is_none_or(|t| actual <= t)
}

/// Reject internally inconsistent bounds.
///
/// Independent of upstream input validation: compile paths re-check so a
/// criteria record that bypassed the parse step still cannot produce a
/// nonsense filter.
pub fn check_consistent(criteria: &SearchCriteria) -> Result<(), InvalidCriteriaError> {
    if let (Some(min), Some(max)) = (criteria.min_price, criteria.max_price)
        && min > max
    {
        return Err(InvalidCriteriaError::PriceBounds { min, max });
    }

    if let (Some(from), Some(to)) = (criteria.pickup_date_from, criteria.pickup_date_to)
        && from > to
    {
        return Err(InvalidCriteriaError::PickupWindow { from, to });
    }

    if let (Some(from), Some(to)) = (criteria.delivery_date_from, criteria.delivery_date_to)
        && from > to
    {
        return Err(InvalidCriteriaError::DeliveryWindow { from, to });
    }

    Ok(())
}

/// Filter form, forward direction: a filter over freight rows accepting
/// exactly the freights `criteria` matches.
///
/// Every bound constraint lowers to one single-column equality or range
/// clause; unconstrained fields contribute nothing. The result is a plain
/// conjunction a storage collaborator can answer with index lookups — no
/// constraint subset ever degrades to a scan-only shape.
pub fn freight_filter(criteria: &SearchCriteria) -> Result<FilterExpr, InvalidCriteriaError> {
    check_consistent(criteria)?;

    let mut conjuncts = Vec::new();

    if let Bound::To(code) = Bound::from(criteria.pickup_code) {
        conjuncts.push(FilterExpr::eq(Freight::PICKUP_CODE, code));
    }
    if let Bound::To(code) = Bound::from(criteria.delivery_code) {
        conjuncts.push(FilterExpr::eq(Freight::DELIVERY_CODE, code));
    }
    if let Bound::To(min) = Bound::from(criteria.min_price) {
        conjuncts.push(FilterExpr::gte(Freight::PRICE, min));
    }
    if let Bound::To(max) = Bound::from(criteria.max_price) {
        conjuncts.push(FilterExpr::lte(Freight::PRICE, max));
    }
    if let Bound::To(from) = Bound::from(criteria.pickup_date_from) {
        conjuncts.push(FilterExpr::gte(Freight::PICKUP_DATE, from));
    }
    if let Bound::To(to) = Bound::from(criteria.pickup_date_to) {
        conjuncts.push(FilterExpr::lte(Freight::PICKUP_DATE, to));
    }
    if let Bound::To(from) = Bound::from(criteria.delivery_date_from) {
        conjuncts.push(FilterExpr::gte(Freight::DELIVERY_DATE, from));
    }
    if let Bound::To(to) = Bound::from(criteria.delivery_date_to) {
        conjuncts.push(FilterExpr::lte(Freight::DELIVERY_DATE, to));
    }

    Ok(conjunction(conjuncts))
}

/// Filter form, inverse direction: a filter over freight-search rows
/// accepting exactly the criteria that match this one `freight`.
///
/// Each sub-predicate becomes a condition on the criteria columns with the
/// freight values fixed. Route codes use the two-element membership form
/// `col IN (:value, NULL)`; bound columns use the literal
/// `col IS NULL OR col <cmp> :value` pair. Both shapes are the only OR
/// patterns the index-friendliness contract permits.
#[must_use]
pub fn search_filter(freight: &Freight) -> FilterExpr {
    let null_or = |field: &'static str, cmp: FilterExpr| FilterExpr::is_null(field).or(cmp);

    FilterExpr::And(vec![
        FilterExpr::in_iter(
            FreightSearch::PICKUP_CODE,
            vec![Value::Int(freight.pickup_code), Value::Null],
        ),
        FilterExpr::in_iter(
            FreightSearch::DELIVERY_CODE,
            vec![Value::Int(freight.delivery_code), Value::Null],
        ),
        null_or(
            FreightSearch::MIN_PRICE,
            FilterExpr::lte(FreightSearch::MIN_PRICE, freight.price),
        ),
        null_or(
            FreightSearch::MAX_PRICE,
            FilterExpr::gte(FreightSearch::MAX_PRICE, freight.price),
        ),
        null_or(
            FreightSearch::PICKUP_DATE_FROM,
            FilterExpr::lte(FreightSearch::PICKUP_DATE_FROM, freight.pickup_date),
        ),
        null_or(
            FreightSearch::PICKUP_DATE_TO,
            FilterExpr::gte(FreightSearch::PICKUP_DATE_TO, freight.pickup_date),
        ),
        null_or(
            FreightSearch::DELIVERY_DATE_FROM,
            FilterExpr::lte(FreightSearch::DELIVERY_DATE_FROM, freight.delivery_date),
        ),
        null_or(
            FreightSearch::DELIVERY_DATE_TO,
            FilterExpr::gte(FreightSearch::DELIVERY_DATE_TO, freight.delivery_date),
        ),
    ])
}

fn conjunction(mut conjuncts: Vec<FilterExpr>) -> FilterExpr {
    match conjuncts.len() {
        0 => FilterExpr::True,
        1 => conjuncts.remove(0),
        _ => FilterExpr::And(conjuncts),
    }
}
