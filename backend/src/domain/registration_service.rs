//! Registration service backing the registration ports with a shared registry.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use super::ports::{RegisteredUsersQuery, RegistrationCommand};
use super::{Error, NewRegistration, RegisteredUser, UserRegistry};

/// Implements the registration command and query over one [`UserRegistry`].
///
/// Cloning the service shares the underlying registry.
#[derive(Clone, Default)]
pub struct RegistrationService {
    registry: Arc<UserRegistry>,
}

impl RegistrationService {
    /// Wrap an existing registry.
    pub fn new(registry: Arc<UserRegistry>) -> Self {
        Self { registry }
    }

    /// Shared handle to the backing registry.
    pub fn registry(&self) -> &Arc<UserRegistry> {
        &self.registry
    }
}

#[async_trait]
impl RegistrationCommand for RegistrationService {
    async fn register(&self, request: NewRegistration) -> Result<RegisteredUser, Error> {
        let username = request.username().to_owned();
        match self.registry.register(request) {
            Ok(user) => {
                info!(
                    username = user.username(),
                    registered = self.registry.len(),
                    "user registered"
                );
                Ok(user)
            }
            Err(err) => {
                debug!(%username, reason = %err, kind = ?err.kind(), "registration rejected");
                Err(Error::from(err))
            }
        }
    }
}

#[async_trait]
impl RegisteredUsersQuery for RegistrationService {
    async fn list_users(&self) -> Result<Vec<RegisteredUser>, Error> {
        Ok(self.registry.list())
    }
}
