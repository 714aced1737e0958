//! Greeting and message acknowledgement used by the demo endpoints.

/// Greeting returned by the API index.
pub const GREETING: &str = "Hello World! The registry service is running.";

/// Salutation returned by `GET /api/v1/greet`.
pub const SALUTATION: &str = "Hello there, good morning!";

const ACKNOWLEDGEMENT_SUFFIX: &str = " Thank You!";

/// Acknowledge a client message by appending a thank-you suffix.
///
/// # Examples
/// ```
/// use registry_backend::domain::acknowledge;
///
/// assert_eq!(acknowledge("Hello"), "Hello Thank You!");
/// ```
pub fn acknowledge(message: &str) -> String {
    let mut reply = String::with_capacity(message.len() + ACKNOWLEDGEMENT_SUFFIX.len());
    reply.push_str(message);
    reply.push_str(ACKNOWLEDGEMENT_SUFFIX);
    reply
}
