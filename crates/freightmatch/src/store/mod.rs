mod memory;

pub use memory::MemoryStore;

use crate::{
    filter::FilterExpr,
    model::{
        Freight, FreightDraft, FreightId, FreightSearch, SearchCriteria, User, UserDraft, UserId,
    },
    page::OrderSpec,
};
use thiserror::Error as ThisError;

///
/// StoreError
///
/// Collaborator-side failure. Surfaced as-is; matching never retries
/// (transient-failure retries belong to the storage collaborator itself).
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum StoreError {
    #[error("storage backend failure: {message}")]
    Backend { message: String },
}

///
/// StoreCapabilities
///
/// What the storage engine can do beyond the baseline contract. Partial
/// (filtered) indexes on the nullable bound columns exist on some engines
/// and not others; compiled filters must be correct either way, only
/// slower without them.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct StoreCapabilities {
    pub partial_indexes: bool,
}

///
/// Store
///
/// Insert-only persistence collaborator. The matching core is read-only
/// over this data; entities are never mutated or deleted through it.
///
/// Index expectations: a composite index on `(pickup_code, delivery_code)`
/// over freight searches, plus optional partial indexes on each nullable
/// bound column when `capabilities().partial_indexes` holds. `query_searches`
/// must return rows ordered by `order`, sliced to `[offset, offset+limit)`.
///

pub trait Store {
    fn capabilities(&self) -> StoreCapabilities;

    fn insert_user(&self, draft: UserDraft) -> Result<User, StoreError>;

    fn get_user(&self, id: UserId) -> Result<Option<User>, StoreError>;

    fn insert_freight(&self, draft: FreightDraft) -> Result<Freight, StoreError>;

    fn get_freight(&self, id: FreightId) -> Result<Option<Freight>, StoreError>;

    fn insert_search(
        &self,
        user_id: UserId,
        criteria: SearchCriteria,
    ) -> Result<FreightSearch, StoreError>;

    fn query_searches(
        &self,
        filter: &FilterExpr,
        order: &OrderSpec,
        limit: u32,
        offset: u64,
    ) -> Result<Vec<FreightSearch>, StoreError>;
}
