//! User registry backend library modules.
//!
//! The domain layer owns the registration rules and the in-memory registry;
//! the inbound HTTP adapter exposes them over Actix Web; the server module
//! wires both together with configuration and middleware.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod server;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
