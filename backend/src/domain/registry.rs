//! In-memory registry of registered users.
//!
//! The registry owns its backing sequence; the only way to mutate it is
//! [`UserRegistry::register`], which holds the write lock across validation,
//! the uniqueness check and the append. Concurrent registrations of the same
//! username therefore cannot both succeed.

use std::sync::{PoisonError, RwLock};

use super::registration::{
    NewRegistration, Password, RegisteredUser, RegistrationError, Username,
};

#[derive(Debug)]
struct StoredUser {
    username: Username,
    email: String,
    #[expect(dead_code, reason = "stored but never read back out of the registry")]
    password: Password,
}

impl StoredUser {
    fn public_view(&self) -> RegisteredUser {
        RegisteredUser::new(self.username.as_ref(), self.email.as_str())
    }
}

/// Ordered, append-only collection of registered users.
///
/// # Examples
/// ```
/// use registry_backend::domain::{NewRegistration, UserRegistry};
///
/// let registry = UserRegistry::new();
/// let user = registry
///     .register(NewRegistration::new("alice", "alice@example.com", "supersecret1"))
///     .expect("registration succeeds");
/// assert_eq!(user.username(), "alice");
/// assert_eq!(registry.list(), vec![user]);
/// ```
#[derive(Debug, Default)]
pub struct UserRegistry {
    users: RwLock<Vec<StoredUser>>,
}

impl UserRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and append a new user.
    ///
    /// Checks run in order: username length, password length, uniqueness.
    /// The first violation is returned and the registry is left unchanged.
    pub fn register(&self, request: NewRegistration) -> Result<RegisteredUser, RegistrationError> {
        let validated = request.validate()?;

        // Writers never leave the vector half-updated, so a poisoned lock
        // still guards a consistent sequence.
        let mut users = self.users.write().unwrap_or_else(PoisonError::into_inner);
        if users
            .iter()
            .any(|user| user.username == *validated.username())
        {
            return Err(RegistrationError::UsernameTaken {
                username: validated.username().to_string(),
            });
        }

        let (username, email, password) = validated.into_parts();
        let stored = StoredUser {
            username,
            email,
            password,
        };
        let view = stored.public_view();
        users.push(stored);
        Ok(view)
    }

    /// Snapshot of all registered users in insertion order.
    pub fn list(&self) -> Vec<RegisteredUser> {
        let users = self.users.read().unwrap_or_else(PoisonError::into_inner);
        users.iter().map(StoredUser::public_view).collect()
    }

    /// Number of registered users.
    pub fn len(&self) -> usize {
        self.users.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Whether no user has registered yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
