use derive_more::{Add, AddAssign};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

///
/// Timestamp
/// (in seconds)
///
/// Creation time for recency ordering. Second resolution is intentional:
/// rows created in the same second tie on this field, which is exactly why
/// the pagination order must carry the unique id tie-break.
///

#[derive(
    Add,
    AddAssign,
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[repr(transparent)]
pub struct Timestamp(u64);

impl Timestamp {
    pub const EPOCH: Self = Self(u64::MIN);

    #[must_use]
    pub const fn from_seconds(secs: u64) -> Self {
        Self(secs)
    }

    #[must_use]
    pub const fn as_seconds(self) -> u64 {
        self.0
    }
}

impl Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}
