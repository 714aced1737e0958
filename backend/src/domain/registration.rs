//! Registration value types and their validation rules.
//!
//! Inbound adapters hand raw strings to [`NewRegistration`]; the registry
//! validates them in a fixed order (username length, then password length)
//! before checking uniqueness. Passwords are held in zeroizing storage and
//! never leave the domain.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::json;
use zeroize::Zeroizing;

use super::Error;

/// Maximum number of characters allowed in a username.
pub const USERNAME_MAX: usize = 20;
/// Minimum number of characters required in a password.
pub const PASSWORD_MIN: usize = 10;

/// Category of a registration failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationErrorKind {
    /// A submitted field violates a static constraint.
    Validation,
    /// The username is already registered.
    Conflict,
}

/// Reasons a registration attempt is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistrationError {
    /// Username exceeds [`USERNAME_MAX`] characters.
    #[error("username too long")]
    UsernameTooLong { max: usize, length: usize },
    /// Password is shorter than [`PASSWORD_MIN`] characters.
    #[error("password too short")]
    PasswordTooShort { min: usize, length: usize },
    /// Another record already holds this username.
    #[error("username taken")]
    UsernameTaken { username: String },
}

impl RegistrationError {
    /// Classify the failure as a validation or conflict error.
    ///
    /// # Examples
    /// ```
    /// use registry_backend::domain::{RegistrationError, RegistrationErrorKind};
    ///
    /// let err = RegistrationError::UsernameTaken { username: "alice".into() };
    /// assert_eq!(err.kind(), RegistrationErrorKind::Conflict);
    /// ```
    pub fn kind(&self) -> RegistrationErrorKind {
        match self {
            Self::UsernameTooLong { .. } | Self::PasswordTooShort { .. } => {
                RegistrationErrorKind::Validation
            }
            Self::UsernameTaken { .. } => RegistrationErrorKind::Conflict,
        }
    }
}

impl From<RegistrationError> for Error {
    fn from(value: RegistrationError) -> Self {
        let message = value.to_string();
        match value {
            RegistrationError::UsernameTooLong { max, length } => Error::invalid_request(message)
                .with_details(json!({
                    "field": "username",
                    "code": "username_too_long",
                    "max": max,
                    "length": length,
                })),
            RegistrationError::PasswordTooShort { min, length } => {
                Error::invalid_request(message).with_details(json!({
                    "field": "password",
                    "code": "password_too_short",
                    "min": min,
                    "length": length,
                }))
            }
            RegistrationError::UsernameTaken { username } => {
                Error::conflict(message).with_details(json!({
                    "field": "username",
                    "code": "username_taken",
                    "value": username,
                }))
            }
        }
    }
}

/// Username accepted by the registry.
///
/// Length is measured in characters, not bytes. Comparison is
/// case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    /// Validate and construct a [`Username`].
    pub fn new(username: impl Into<String>) -> Result<Self, RegistrationError> {
        let username = username.into();
        let length = username.chars().count();
        if length > USERNAME_MAX {
            return Err(RegistrationError::UsernameTooLong {
                max: USERNAME_MAX,
                length,
            });
        }
        Ok(Self(username))
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<Username> for String {
    fn from(value: Username) -> Self {
        value.0
    }
}

/// Password accepted by the registry, wiped from memory on drop.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(Zeroizing<String>);

impl Password {
    /// Validate and construct a [`Password`].
    pub fn new(password: impl Into<String>) -> Result<Self, RegistrationError> {
        let password = Zeroizing::new(password.into());
        let length = password.chars().count();
        if length < PASSWORD_MIN {
            return Err(RegistrationError::PasswordTooShort {
                min: PASSWORD_MIN,
                length,
            });
        }
        Ok(Self(password))
    }

    /// Borrow the plaintext password.
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(<redacted>)")
    }
}

/// Registration request as submitted, before any validation.
///
/// # Examples
/// ```
/// use registry_backend::domain::NewRegistration;
///
/// let request = NewRegistration::new("alice", "alice@example.com", "supersecret1");
/// let validated = request.validate().expect("valid registration");
/// assert_eq!(validated.username().as_ref(), "alice");
/// ```
#[derive(Clone)]
pub struct NewRegistration {
    username: String,
    email: String,
    password: Zeroizing<String>,
}

impl NewRegistration {
    /// Bundle raw registration fields.
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: Zeroizing::new(password.into()),
        }
    }

    /// Submitted username.
    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Submitted email address.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Apply the static field constraints; the first violation wins.
    pub fn validate(self) -> Result<ValidatedRegistration, RegistrationError> {
        let Self {
            username,
            email,
            password,
        } = self;
        let username = Username::new(username)?;
        let password = Password::new(password.as_str())?;
        Ok(ValidatedRegistration {
            username,
            email,
            password,
        })
    }
}

impl fmt::Debug for NewRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewRegistration")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Registration whose fields passed the static constraints.
#[derive(Debug, Clone)]
pub struct ValidatedRegistration {
    username: Username,
    email: String,
    password: Password,
}

impl ValidatedRegistration {
    /// Validated username.
    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Email address as submitted.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    pub(crate) fn into_parts(self) -> (Username, String, Password) {
        (self.username, self.email, self.password)
    }
}

/// Public view of a registered user. Never carries the password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredUser {
    username: String,
    email: String,
}

impl RegisteredUser {
    /// Build a public user view.
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
        }
    }

    /// Registered username.
    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Registered email address.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }
}
