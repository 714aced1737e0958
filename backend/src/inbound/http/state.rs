//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::RegistrationService;
use crate::domain::ports::{RegisteredUsersQuery, RegistrationCommand};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub registration: Arc<dyn RegistrationCommand>,
    pub users: Arc<dyn RegisteredUsersQuery>,
}

impl HttpState {
    /// Construct state from explicit port implementations.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use registry_backend::domain::RegistrationService;
    /// use registry_backend::inbound::http::state::HttpState;
    ///
    /// let service = Arc::new(RegistrationService::default());
    /// let state = HttpState::new(service.clone(), service);
    /// let _users = state.users.clone();
    /// ```
    pub fn new(
        registration: Arc<dyn RegistrationCommand>,
        users: Arc<dyn RegisteredUsersQuery>,
    ) -> Self {
        Self {
            registration,
            users,
        }
    }
}

impl From<RegistrationService> for HttpState {
    fn from(service: RegistrationService) -> Self {
        let service = Arc::new(service);
        Self::new(service.clone(), service)
    }
}

impl Default for HttpState {
    fn default() -> Self {
        Self::from(RegistrationService::default())
    }
}
