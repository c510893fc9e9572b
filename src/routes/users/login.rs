use axum::{extract::State, http::StatusCode, Json};
use axum_extra::extract::WithRejection;
use color_eyre::eyre::eyre;
use secrecy::Secret;
use serde::{Deserialize, Serialize};

use crate::{
    app_state::AppState,
    domain::{AuthAPIError, Email, Password, User, UserStoreError},
};

#[tracing::instrument(name = "Login", skip_all)]
pub async fn login(
    State(state): State<AppState>,
    WithRejection(Json(request), _): WithRejection<
        Json<LoginRequest>,
        AuthAPIError,
    >,
) -> Result<(StatusCode, Json<LoginResponse>), AuthAPIError> {
    let email = Email::new(request.email);
    let password = Password::new(request.password);

    let user = state
        .user_store
        .read()
        .await
        .authenticate(&email, &password)
        .await
        .map_err(|e| match e {
            UserStoreError::InvalidCredentials
            | UserStoreError::UserNotFound => {
                AuthAPIError::IncorrectCredentials
            }
            e => AuthAPIError::UnexpectedError(eyre!(e)),
        })?;

    let response = Json(LoginResponse {
        message: "Login successful".to_owned(),
        user,
    });

    Ok((StatusCode::OK, response))
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    #[serde(rename = "passwordSecret", alias = "pass")]
    pub password: Secret<String>,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub user: User,
}
