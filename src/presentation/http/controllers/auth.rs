// src/presentation/http/controllers/auth.rs
use crate::application::{commands::users::RegisterUserCommand, error::ApplicationError};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::JsonBody;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

pub const SIGNUP_SUCCESS_MESSAGE: &str = "User created successfully";

/// Both fields are optional at the wire level so that an absent field yields
/// a validation message naming it.
#[derive(Deserialize, ToSchema)]
pub struct RegisterRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

impl fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl RegisterRequest {
    fn into_command(self) -> Result<RegisterUserCommand, ApplicationError> {
        let email = self
            .email
            .ok_or_else(|| ApplicationError::validation("email is required"))?;
        let password = self
            .password
            .ok_or_else(|| ApplicationError::validation("password is required"))?;
        Ok(RegisterUserCommand { email, password })
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SignupResponse {
    pub message: String,
}

#[utoipa::path(
    post,
    path = "/api/auth/signup",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "User created.", body = SignupResponse),
        (status = 400, description = "Missing field or malformed body.", body = ErrorResponse),
        (status = 409, description = "Email already registered.", body = ErrorResponse),
        (status = 500, description = "Hashing or storage failure.", body = ErrorResponse)
    ),
    tag = "Auth"
)]
pub async fn signup(
    Extension(state): Extension<HttpState>,
    JsonBody(payload): JsonBody<RegisterRequest>,
) -> HttpResult<Json<SignupResponse>> {
    let command = payload.into_command()?;

    state
        .services
        .user_commands
        .register(command)
        .await
        .into_http()?;

    Ok(Json(SignupResponse {
        message: SIGNUP_SUCCESS_MESSAGE.to_string(),
    }))
}
