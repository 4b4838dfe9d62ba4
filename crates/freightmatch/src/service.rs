use crate::{
    compile::{check_consistent, search_filter},
    error::{Error, NotFoundError},
    model::{
        CriteriaInput, Freight, FreightDraft, FreightId, FreightInput, FreightSearch,
        SearchCriteria, User, UserDraft, UserId,
    },
    page::{Cursor, OrderSpec, Page, PageSpec},
    store::Store,
};
use serde::{Deserialize, Serialize};

///
/// MatchPage
///
/// One page of searches matching a freight, plus whether more pages exist
/// and, when they do, the strict continuation cursor for the next one.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct MatchPage {
    pub items: Vec<FreightSearch>,
    pub has_more: bool,
    pub next_cursor: Option<Cursor>,
}

///
/// MatchService
///
/// Orchestration only: resolve the target freight, compile the inverse
/// filter over the criteria table, and let the store and the pagination
/// layer do the rest. Stateless per request; matching is pure and holds no
/// locks of its own.
///

pub struct MatchService<S: Store> {
    store: S,
}

impl<S: Store> MatchService<S> {
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    // ------------------------------------------------------------------
    // Insert-only CRUD path
    // ------------------------------------------------------------------

    pub fn create_user(&self, draft: UserDraft) -> Result<User, Error> {
        Ok(self.store.insert_user(draft)?)
    }

    pub fn create_freight(&self, input: FreightInput) -> Result<Freight, Error> {
        let draft = FreightDraft::parse(input)?;

        Ok(self.store.insert_freight(draft)?)
    }

    /// Validate and persist a saved search. Inverted ranges are caught here,
    /// before the row ever reaches the criteria table.
    pub fn create_search(
        &self,
        user_id: UserId,
        input: CriteriaInput,
    ) -> Result<FreightSearch, Error> {
        let criteria = SearchCriteria::parse(input)?;
        check_consistent(&criteria)?;

        if self.store.get_user(user_id)?.is_none() {
            return Err(NotFoundError::User(user_id).into());
        }

        Ok(self.store.insert_search(user_id, criteria)?)
    }

    // ------------------------------------------------------------------
    // Matching
    // ------------------------------------------------------------------

    /// Enumerate saved searches whose criteria accept the given freight,
    /// as the `[offset, offset+limit)` window of the canonical
    /// `(created_at, id)` order.
    pub fn find_matches(
        &self,
        freight_id: FreightId,
        limit: i64,
        offset: i64,
    ) -> Result<MatchPage, Error> {
        let spec = PageSpec::new(limit, offset)?;

        self.page_matches(freight_id, spec, None)
    }

    /// Cursor variant: rows strictly after `after` under the canonical
    /// order. Continues a listing without the deep-offset scan cost.
    pub fn find_matches_after(
        &self,
        freight_id: FreightId,
        after: Option<Cursor>,
        limit: i64,
    ) -> Result<MatchPage, Error> {
        let spec = PageSpec::new(limit, 0)?;

        self.page_matches(freight_id, spec, after)
    }

    fn page_matches(
        &self,
        freight_id: FreightId,
        spec: PageSpec,
        after: Option<Cursor>,
    ) -> Result<MatchPage, Error> {
        let freight = self
            .store
            .get_freight(freight_id)?
            .ok_or(NotFoundError::Freight(freight_id))?;

        let filter =
            search_filter(&freight).and_option(after.map(|cursor| cursor.boundary_expr()));
        let order = OrderSpec::creation_order();
        order.ensure_total(FreightSearch::ID)?;

        let rows = self
            .store
            .query_searches(&filter, &order, spec.fetch_limit(), spec.offset())?;
        let page = Page::from_fetched(rows, spec.limit());

        let next_cursor = if page.has_more {
            page.items.last().map(Cursor::after_row)
        } else {
            None
        };

        tracing::debug!(
            freight = %freight_id,
            returned = page.items.len(),
            has_more = page.has_more,
            "find_matches"
        );

        Ok(MatchPage {
            items: page.items,
            has_more: page.has_more,
            next_cursor,
        })
    }
}
