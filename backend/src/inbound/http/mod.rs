//! HTTP inbound adapter exposing REST endpoints.

pub mod calculator;
pub mod error;
pub mod health;
pub mod registration;
pub mod schemas;
pub mod state;
pub mod validation;

pub use error::ApiResult;
