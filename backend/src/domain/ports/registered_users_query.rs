//! Driving port for listing registered users.

use async_trait::async_trait;

use crate::domain::{Error, RegisteredUser};

/// Domain use-case port for reading the registry.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegisteredUsersQuery: Send + Sync {
    /// Return all registered users in registration order.
    async fn list_users(&self) -> Result<Vec<RegisteredUser>, Error>;
}
