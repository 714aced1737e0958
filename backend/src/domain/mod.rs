//! Domain primitives, the user registry and its services.
//!
//! Purpose: hold the registration rules and the stateless demo operations
//! independently of any transport. Inbound adapters talk to this layer only
//! through [`ports`] and the exported value types.
//!
//! Public surface:
//! - Error / ErrorCode — transport-agnostic failure envelope.
//! - UserRegistry — lock-guarded, append-only registry of users.
//! - RegistrationService — port implementation over a shared registry.
//! - Operation and the arithmetic helpers — calculator semantics.
//! - TraceId — request-scoped correlation identifier.

pub mod arithmetic;
pub mod error;
pub mod messages;
pub mod ports;
pub mod registration;
pub mod registration_service;
pub mod registry;
pub mod trace_id;

pub use self::arithmetic::{ArithmeticError, CalculationResult, Operation};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::messages::{GREETING, SALUTATION, acknowledge};
pub use self::registration::{
    NewRegistration, PASSWORD_MIN, Password, RegisteredUser, RegistrationError,
    RegistrationErrorKind, USERNAME_MAX, Username, ValidatedRegistration,
};
pub use self::registration_service::RegistrationService;
pub use self::registry::UserRegistry;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
