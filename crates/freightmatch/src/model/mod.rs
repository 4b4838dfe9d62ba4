mod freight;
mod search;
mod user;

pub use freight::{Freight, FreightDraft, FreightId, FreightInput};
pub use search::{CriteriaInput, FreightSearch, FreightSearchId, SearchCriteria};
pub use user::{User, UserDraft, UserId};
