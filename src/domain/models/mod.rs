mod muscle_group;
mod user;
mod workout_detail;
mod workout_session;
mod workout_type;

pub use muscle_group::*;
pub use user::*;
pub use workout_detail::*;
pub use workout_session::*;
pub use workout_type::*;
