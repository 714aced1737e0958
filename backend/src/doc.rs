//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint from the inbound layer together
//! with the schema wrappers that describe domain types without coupling them
//! to utoipa. The document backs Swagger UI in debug builds and is exported
//! by `cargo run --bin openapi-dump`.

use crate::inbound::http::calculator::{
    CalculatorRequest, CalculatorResponse, IndexResponse, IntegerResultResponse, MessageRequest,
    MessageResponse, OperandsRequest,
};
use crate::inbound::http::registration::RegisterUserRequest;
use crate::inbound::http::schemas::{
    ErrorCodeSchema, ErrorSchema, OperationSchema, RegisteredUserSchema,
};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User registry API",
        description = "In-memory user registration with calculator and message demos."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::registration::register_user,
        crate::inbound::http::registration::list_users,
        crate::inbound::http::calculator::index,
        crate::inbound::http::calculator::greet,
        crate::inbound::http::calculator::calculate,
        crate::inbound::http::calculator::multiply,
        crate::inbound::http::calculator::add,
        crate::inbound::http::calculator::post_message,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        RegisterUserRequest,
        RegisteredUserSchema,
        ErrorSchema,
        ErrorCodeSchema,
        OperationSchema,
        CalculatorRequest,
        CalculatorResponse,
        OperandsRequest,
        IntegerResultResponse,
        MessageRequest,
        MessageResponse,
        IndexResponse,
    )),
    tags(
        (name = "users", description = "User registration and listing"),
        (name = "calculator", description = "Stateless arithmetic and message echo"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
