pub mod user_store;
pub mod user_store_err;
pub mod workout_store;
pub mod workout_store_err;

pub use user_store::UserStore;
pub use user_store_err::UserStoreError;
pub use workout_store::*;
pub use workout_store_err::WorkoutStoreError;
