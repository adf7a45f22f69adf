pub mod account;
pub mod auth;
pub mod notify;
pub mod script;
