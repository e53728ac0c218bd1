pub mod claims;
pub mod data_stores;
pub mod email;
pub mod models;
pub mod password;
pub mod token_pair;
mod user;
pub mod workout;

pub use claims::*;
pub use data_stores::*;
pub use email::*;
pub use models::*;
pub use password::*;
pub use token_pair::*;
pub use user::*;
pub use workout::*;
