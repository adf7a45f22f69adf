pub mod accounts;
pub mod auth;
pub mod health;
pub mod notify;
pub mod scripts;
pub mod upload;
