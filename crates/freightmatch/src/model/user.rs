use crate::value::{FieldValue, Value};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

///
/// UserId
///

#[derive(
    Clone, Copy, Debug, Default, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[repr(transparent)]
pub struct UserId(u64);

impl UserId {
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FieldValue for UserId {
    fn to_value(self) -> Value {
        Value::Nat(self.0)
    }
}

///
/// User
///
/// Owner of saved searches. Only referenced for the existence check on the
/// search creation path; matching itself never reads user attributes.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub surname: String,
    pub email: String,
}

///
/// UserDraft
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct UserDraft {
    pub name: String,
    pub surname: String,
    pub email: String,
}
