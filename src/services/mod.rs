pub mod auth;
pub mod data_stores;
pub mod suggester;
pub mod token_service;

pub use auth::*;
pub use data_stores::*;
pub use suggester::*;
pub use token_service::*;
