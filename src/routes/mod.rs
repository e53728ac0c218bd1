pub(crate) mod login;
pub(crate) mod logout;
pub(crate) mod muscle_groups;
pub(crate) mod refresh;
pub(crate) mod signup;
pub(crate) mod suggest;
pub(crate) mod users;
pub(crate) mod verify_token;
pub(crate) mod workout_sessions;
pub(crate) mod workout_types;

// re-export items from sub-modules
pub use login::*;
pub use logout::*;
pub use muscle_groups::*;
pub use refresh::*;
pub use signup::*;
pub use suggest::*;
pub use users::*;
pub use verify_token::*;
pub use workout_sessions::*;
pub use workout_types::*;

use serde::Deserialize;

/// Common `?limit=&offset=` query parameters for list endpoints.
#[derive(Deserialize, Default)]
pub struct Pagination {
    limit: Option<i64>,
    offset: Option<i64>,
}

impl Pagination {
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(100)
    }

    pub fn offset(&self) -> i64 {
        self.offset.unwrap_or(0)
    }
}
