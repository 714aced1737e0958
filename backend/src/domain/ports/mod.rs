//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Inbound adapters depend on these traits rather than on the registry so
//! handler tests can substitute doubles.

mod registered_users_query;
mod registration_command;

#[cfg(test)]
pub use registered_users_query::MockRegisteredUsersQuery;
pub use registered_users_query::RegisteredUsersQuery;
#[cfg(test)]
pub use registration_command::MockRegistrationCommand;
pub use registration_command::RegistrationCommand;
