//! User registration API handlers.
//!
//! ```text
//! POST /api/v1/users {"username":"alice","email":"alice@example.com","password":"supersecret1"}
//! GET /api/v1/users
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};

use crate::domain::{Error, NewRegistration, RegisteredUser};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, RegisteredUserSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, validate_email};

const EMAIL_FIELD: FieldName = FieldName::new("email");

/// Registration request body for `POST /api/v1/users`.
///
/// Example JSON:
/// `{"username":"alice","email":"alice@example.com","password":"supersecret1"}`
#[derive(Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserRequest {
    #[schema(example = "alice")]
    pub username: String,
    #[schema(example = "alice@example.com")]
    pub email: String,
    #[schema(example = "supersecret1", format = Password)]
    pub password: String,
}

impl TryFrom<RegisterUserRequest> for NewRegistration {
    type Error = Error;

    fn try_from(value: RegisterUserRequest) -> Result<Self, Self::Error> {
        validate_email(&value.email, EMAIL_FIELD)?;
        Ok(Self::new(value.username, value.email, value.password))
    }
}

/// Register a new user.
///
/// Returns the stored username and email; the password is never echoed.
#[utoipa::path(
    post,
    path = "/api/v1/users",
    request_body = RegisterUserRequest,
    responses(
        (status = 201, description = "User registered", body = RegisteredUserSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 409, description = "Username taken", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "registerUser"
)]
#[post("/users")]
pub async fn register_user(
    state: web::Data<HttpState>,
    payload: web::Json<RegisterUserRequest>,
) -> ApiResult<HttpResponse> {
    let request = NewRegistration::try_from(payload.into_inner())?;
    let user = state.registration.register(request).await?;
    Ok(HttpResponse::Created().json(user))
}

/// List registered users in registration order.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use registry_backend::inbound::http::registration::list_users;
///
/// let app = App::new().service(list_users);
/// ```
#[utoipa::path(
    get,
    path = "/api/v1/users",
    responses(
        (status = 200, description = "Registered users", body = [RegisteredUserSchema]),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<RegisteredUser>>> {
    let users = state.users.list_users().await?;
    Ok(web::Json(users))
}
