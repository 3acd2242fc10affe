pub mod auth;
pub mod error;
pub mod requests;
pub mod responses;
