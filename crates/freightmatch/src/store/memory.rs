use crate::{
    filter::{FilterExpr, eval},
    model::{
        Freight, FreightDraft, FreightId, FreightSearch, FreightSearchId, SearchCriteria, User,
        UserDraft, UserId,
    },
    page::OrderSpec,
    store::{Store, StoreCapabilities, StoreError},
    types::Timestamp,
};
use std::{
    collections::BTreeMap,
    sync::{RwLock, RwLockReadGuard, RwLockWriteGuard},
};

///
/// MemoryStore
///
/// Reference storage collaborator: filter evaluation over an in-memory
/// table, plus the id/created_at assignment a real backend would own.
/// Behind an `RwLock` so concurrent read-only match requests never block
/// each other; a write lock is held only for inserts.
///

#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
    capabilities: StoreCapabilities,
}

#[derive(Debug, Default)]
struct Inner {
    users: BTreeMap<u64, User>,
    freights: BTreeMap<u64, Freight>,
    searches: BTreeMap<u64, FreightSearch>,
    next_user_id: u64,
    next_freight_id: u64,
    next_search_id: u64,
    now: Timestamp,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_capabilities(capabilities: StoreCapabilities) -> Self {
        Self {
            inner: RwLock::new(Inner::default()),
            capabilities,
        }
    }

    /// Set the clock used to stamp `created_at` on inserted searches.
    /// Second resolution means rows inserted at the same instant tie, which
    /// is the case the unique-id tie-break exists for.
    pub fn set_now(&self, now: Timestamp) -> Result<(), StoreError> {
        self.write()?.now = now;

        Ok(())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Inner>, StoreError> {
        self.inner.read().map_err(|_| poisoned())
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Inner>, StoreError> {
        self.inner.write().map_err(|_| poisoned())
    }
}

fn poisoned() -> StoreError {
    StoreError::Backend {
        message: "memory store lock poisoned".to_string(),
    }
}

impl Store for MemoryStore {
    fn capabilities(&self) -> StoreCapabilities {
        self.capabilities
    }

    fn insert_user(&self, draft: UserDraft) -> Result<User, StoreError> {
        let mut inner = self.write()?;

        inner.next_user_id += 1;
        let user = User {
            id: UserId::new(inner.next_user_id),
            name: draft.name,
            surname: draft.surname,
            email: draft.email,
        };
        inner.users.insert(user.id.get(), user.clone());

        Ok(user)
    }

    fn get_user(&self, id: UserId) -> Result<Option<User>, StoreError> {
        Ok(self.read()?.users.get(&id.get()).cloned())
    }

    fn insert_freight(&self, draft: FreightDraft) -> Result<Freight, StoreError> {
        let mut inner = self.write()?;

        inner.next_freight_id += 1;
        let freight = Freight {
            id: FreightId::new(inner.next_freight_id),
            price: draft.price,
            pickup_code: draft.pickup_code,
            delivery_code: draft.delivery_code,
            pickup_date: draft.pickup_date,
            delivery_date: draft.delivery_date,
        };
        inner.freights.insert(freight.id.get(), freight.clone());

        Ok(freight)
    }

    fn get_freight(&self, id: FreightId) -> Result<Option<Freight>, StoreError> {
        Ok(self.read()?.freights.get(&id.get()).cloned())
    }

    fn insert_search(
        &self,
        user_id: UserId,
        criteria: SearchCriteria,
    ) -> Result<FreightSearch, StoreError> {
        let mut inner = self.write()?;

        inner.next_search_id += 1;
        let search = FreightSearch {
            id: FreightSearchId::new(inner.next_search_id),
            user_id,
            created_at: inner.now,
            criteria,
        };
        inner.searches.insert(search.id.get(), search.clone());

        Ok(search)
    }

    fn query_searches(
        &self,
        filter: &FilterExpr,
        order: &OrderSpec,
        limit: u32,
        offset: u64,
    ) -> Result<Vec<FreightSearch>, StoreError> {
        let inner = self.read()?;
        let candidates = inner.searches.len();

        let mut rows: Vec<FreightSearch> = inner
            .searches
            .values()
            .filter(|row| eval(*row, filter))
            .cloned()
            .collect();
        drop(inner);

        let matched = rows.len();
        rows.sort_by(|left, right| order.compare(left, right));

        let offset = usize::try_from(offset).unwrap_or(usize::MAX);
        let rows: Vec<FreightSearch> = rows
            .into_iter()
            .skip(offset)
            .take(limit as usize)
            .collect();

        tracing::debug!(candidates, matched, returned = rows.len(), "search query");

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{model::SearchCriteria, page::OrderDirection};

    fn seed(store: &MemoryStore, count: u64) {
        for _ in 0..count {
            store
                .insert_search(UserId::new(1), SearchCriteria::default())
                .unwrap();
        }
    }

    #[test]
    fn ids_are_assigned_monotonically() {
        let store = MemoryStore::new();

        let first = store
            .insert_search(UserId::new(1), SearchCriteria::default())
            .unwrap();
        let second = store
            .insert_search(UserId::new(1), SearchCriteria::default())
            .unwrap();

        assert!(second.id > first.id);
    }

    #[test]
    fn created_at_comes_from_the_store_clock() {
        let store = MemoryStore::new();

        store.set_now(Timestamp::from_seconds(42)).unwrap();
        let search = store
            .insert_search(UserId::new(1), SearchCriteria::default())
            .unwrap();

        assert_eq!(search.created_at, Timestamp::from_seconds(42));
    }

    #[test]
    fn query_orders_and_slices() {
        let store = MemoryStore::new();
        seed(&store, 5);

        let order = OrderSpec::creation_order();
        let rows = store
            .query_searches(&FilterExpr::True, &order, 2, 2)
            .unwrap();

        let ids: Vec<u64> = rows.iter().map(|r| r.id.get()).collect();
        assert_eq!(ids, vec![3, 4]);
    }

    #[test]
    fn query_applies_the_filter() {
        let store = MemoryStore::new();
        store
            .insert_search(
                UserId::new(1),
                SearchCriteria {
                    pickup_code: Some(10100),
                    ..SearchCriteria::default()
                },
            )
            .unwrap();
        store
            .insert_search(UserId::new(1), SearchCriteria::default())
            .unwrap();

        let order = OrderSpec::creation_order();
        let filter = FilterExpr::is_null(FreightSearch::PICKUP_CODE);
        let rows = store.query_searches(&filter, &order, 10, 0).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id.get(), 2);
    }

    #[test]
    fn descending_order_is_supported() {
        let store = MemoryStore::new();
        seed(&store, 3);

        let order = OrderSpec {
            fields: vec![
                (
                    FreightSearch::CREATED_AT.to_string(),
                    OrderDirection::Desc,
                ),
                (FreightSearch::ID.to_string(), OrderDirection::Desc),
            ],
        };
        let rows = store
            .query_searches(&FilterExpr::True, &order, 10, 0)
            .unwrap();

        let ids: Vec<u64> = rows.iter().map(|r| r.id.get()).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn capabilities_default_to_no_partial_indexes() {
        assert!(!MemoryStore::new().capabilities().partial_indexes);
        assert!(
            MemoryStore::with_capabilities(StoreCapabilities {
                partial_indexes: true
            })
            .capabilities()
            .partial_indexes
        );
    }
}
