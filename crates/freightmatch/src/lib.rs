//! Deterministic matching of freight rows against saved search criteria:
//! typed values, a serializable filter expression tree, the predicate
//! compiler (point form and both bulk filter directions), and stable
//! offset/cursor pagination over a total `(created_at, id)` order.
#![warn(unreachable_pub)]

pub mod compile;
pub mod error;
pub mod filter;
pub mod model;
pub mod page;
pub mod service;
pub mod store;
pub mod types;
pub mod value;

#[cfg(test)]
pub(crate) mod test_fixtures;

///
/// CONSTANTS
///

/// Maximum rows a single page may request.
///
/// Bounds response size; a `limit` above this is rejected, never clamped,
/// so callers always learn they asked for more than the contract allows.
pub const MAX_PAGE_SIZE: u32 = 1000;

///
/// Prelude
///
/// Domain vocabulary only. Errors, stores, and compiler internals are
/// imported from their own modules.
///

pub mod prelude {
    pub use crate::{
        model::{Freight, FreightId, FreightSearch, FreightSearchId, SearchCriteria, UserId},
        types::{Date, Price, Timestamp},
        value::Value,
    };
}
