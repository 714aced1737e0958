//! Driving port for the registration use-case.
//!
//! Inbound adapters call this port with the raw submitted fields; the
//! implementation owns validation and uniqueness so adapters never touch the
//! registry directly.

use async_trait::async_trait;

use crate::domain::{Error, NewRegistration, RegisteredUser};

/// Domain use-case port for registering users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistrationCommand: Send + Sync {
    /// Register a user, returning the stored public view.
    ///
    /// Fails with [`crate::domain::ErrorCode::InvalidRequest`] when a field
    /// violates a static constraint and [`crate::domain::ErrorCode::Conflict`]
    /// when the username is taken.
    async fn register(&self, request: NewRegistration) -> Result<RegisteredUser, Error>;
}
