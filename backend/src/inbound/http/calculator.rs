//! Calculator, arithmetic and message echo handlers.
//!
//! ```text
//! GET /api/v1/
//! GET /api/v1/greet
//! POST /api/v1/calculator {"x":10,"y":4,"operation":"divide"}
//! POST /api/v1/multiply {"a":6,"b":7}
//! POST /api/v1/add {"a":2,"b":3}
//! POST /api/v1/messages {"msg":"Hello"}
//! ```

use actix_web::{get, post, web};
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

use crate::domain::{
    CalculationResult, GREETING, Operation, SALUTATION, acknowledge, arithmetic,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, OperationSchema};

/// Request body for `POST /api/v1/calculator`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorRequest {
    #[schema(example = 10)]
    pub x: i64,
    #[schema(example = 4)]
    pub y: i64,
    #[schema(value_type = OperationSchema)]
    pub operation: Operation,
}

/// Response body for `POST /api/v1/calculator`.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorResponse {
    #[schema(value_type = OperationSchema)]
    pub operation: Operation,
    #[schema(value_type = f64, example = 2.5)]
    pub result: CalculationResult,
}

/// Operand pair for the single-operation endpoints.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OperandsRequest {
    #[schema(example = 6)]
    pub a: i64,
    #[schema(example = 7)]
    pub b: i64,
}

/// Integer result of a single-operation endpoint.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IntegerResultResponse {
    #[schema(example = 42)]
    pub result: i64,
}

/// Request body for `POST /api/v1/messages`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MessageRequest {
    #[schema(example = "Hello")]
    pub msg: String,
}

/// Acknowledgement returned by `POST /api/v1/messages`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    #[schema(example = "Hello Thank You!")]
    pub message: String,
}

/// Greeting and endpoint index returned by `GET /api/v1/`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IndexResponse {
    pub message: String,
    pub endpoints: Vec<String>,
}

const ENDPOINTS: [&str; 7] = [
    "GET /api/v1/greet",
    "POST /api/v1/users",
    "GET /api/v1/users",
    "POST /api/v1/calculator",
    "POST /api/v1/multiply",
    "POST /api/v1/add",
    "POST /api/v1/messages",
];

/// Greet the caller and list the available endpoints.
#[utoipa::path(
    get,
    path = "/api/v1/",
    responses((status = 200, description = "Greeting", body = IndexResponse)),
    tags = ["calculator"],
    operation_id = "index"
)]
#[get("/")]
pub async fn index() -> web::Json<IndexResponse> {
    web::Json(IndexResponse {
        message: GREETING.to_owned(),
        endpoints: ENDPOINTS.iter().map(|&endpoint| endpoint.to_owned()).collect(),
    })
}

/// Return a plain salutation.
#[utoipa::path(
    get,
    path = "/api/v1/greet",
    responses((status = 200, description = "Salutation", body = MessageResponse)),
    tags = ["calculator"],
    operation_id = "greet"
)]
#[get("/greet")]
pub async fn greet() -> web::Json<MessageResponse> {
    web::Json(MessageResponse {
        message: SALUTATION.to_owned(),
    })
}

/// Apply the requested operation to `x` and `y`.
#[utoipa::path(
    post,
    path = "/api/v1/calculator",
    request_body = CalculatorRequest,
    responses(
        (status = 200, description = "Calculation result", body = CalculatorResponse),
        (status = 400, description = "Invalid request or arithmetic failure", body = ErrorSchema)
    ),
    tags = ["calculator"],
    operation_id = "calculate"
)]
#[post("/calculator")]
pub async fn calculate(
    payload: web::Json<CalculatorRequest>,
) -> ApiResult<web::Json<CalculatorResponse>> {
    let CalculatorRequest { x, y, operation } = payload.into_inner();
    let result = operation.apply(x, y)?;
    debug!(%operation, x, y, "calculation applied");
    Ok(web::Json(CalculatorResponse { operation, result }))
}

/// Multiply `a` by `b`.
#[utoipa::path(
    post,
    path = "/api/v1/multiply",
    request_body = OperandsRequest,
    responses(
        (status = 200, description = "Product", body = IntegerResultResponse),
        (status = 400, description = "Invalid request or overflow", body = ErrorSchema)
    ),
    tags = ["calculator"],
    operation_id = "multiply"
)]
#[post("/multiply")]
pub async fn multiply(
    payload: web::Json<OperandsRequest>,
) -> ApiResult<web::Json<IntegerResultResponse>> {
    let OperandsRequest { a, b } = payload.into_inner();
    let result = arithmetic::multiply(a, b)?;
    Ok(web::Json(IntegerResultResponse { result }))
}

/// Add `a` and `b`.
#[utoipa::path(
    post,
    path = "/api/v1/add",
    request_body = OperandsRequest,
    responses(
        (status = 200, description = "Sum", body = IntegerResultResponse),
        (status = 400, description = "Invalid request or overflow", body = ErrorSchema)
    ),
    tags = ["calculator"],
    operation_id = "add"
)]
#[post("/add")]
pub async fn add(payload: web::Json<OperandsRequest>) -> ApiResult<web::Json<IntegerResultResponse>> {
    let OperandsRequest { a, b } = payload.into_inner();
    let result = arithmetic::add(a, b)?;
    Ok(web::Json(IntegerResultResponse { result }))
}

/// Acknowledge a client message.
#[utoipa::path(
    post,
    path = "/api/v1/messages",
    request_body = MessageRequest,
    responses(
        (status = 200, description = "Acknowledgement", body = MessageResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema)
    ),
    tags = ["calculator"],
    operation_id = "acknowledgeMessage"
)]
#[post("/messages")]
pub async fn post_message(payload: web::Json<MessageRequest>) -> web::Json<MessageResponse> {
    web::Json(MessageResponse {
        message: acknowledge(&payload.msg),
    })
}
