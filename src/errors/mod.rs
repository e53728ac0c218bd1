mod auth_header;
mod login;
mod refresh;
mod signup;
mod suggest;
mod users;
mod verify_token;
mod workouts;

pub use auth_header::*;
pub use login::*;
pub use refresh::*;
pub use signup::*;
pub use suggest::*;
pub use users::*;
pub use verify_token::*;
pub use workouts::*;
