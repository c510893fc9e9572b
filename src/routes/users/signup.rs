use axum::{extract::State, http::StatusCode, Json};
use axum_extra::extract::WithRejection;
use color_eyre::eyre::eyre;
use secrecy::Secret;
use serde::{Deserialize, Serialize};

use crate::{
    app_state::AppState,
    domain::{
        AuthAPIError, Email, NewUser, Password, UserId, UserStoreError,
    },
};

#[tracing::instrument(name = "Signup", skip_all)]
pub async fn signup(
    State(state): State<AppState>,
    WithRejection(Json(request), _): WithRejection<
        Json<SignupRequest>,
        AuthAPIError,
    >,
) -> Result<(StatusCode, Json<SignupResponse>), AuthAPIError> {
    let user = NewUser::new(
        request.name,
        Email::new(request.email),
        Password::new(request.password),
    );

    let user = state
        .user_store
        .write()
        .await
        .add_user(user)
        .await
        .map_err(|e| match e {
            UserStoreError::UserAlreadyExists => {
                AuthAPIError::UserAlreadyExists
            }
            err => AuthAPIError::StorageError(eyre!(err)),
        })?;

    let response = Json(SignupResponse {
        id: user.id,
        name: user.name,
        email: user.email,
    });

    Ok((StatusCode::OK, response))
}

#[derive(Deserialize)]
pub struct SignupRequest {
    #[serde(alias = "nombre")]
    pub name: String,
    pub email: String,
    #[serde(rename = "passwordSecret", alias = "pass")]
    pub password: Secret<String>,
}

#[derive(Debug, Deserialize, PartialEq, Serialize)]
pub struct SignupResponse {
    pub id: UserId,
    pub name: String,
    pub email: Email,
}
