use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::WithRejection;
use color_eyre::eyre::eyre;
use serde::Deserialize;

use super::ChangesResponse;
use crate::{
    domain::{deserialize_decimal, ProjectAPIError, ProjectId},
    AppState,
};

#[tracing::instrument(name = "Update estimated revenue route handler", skip_all)]
pub async fn update_estimated_revenue(
    State(state): State<AppState>,
    Path(id): Path<String>,
    WithRejection(Json(request), _): WithRejection<
        Json<UpdateRevenueRequest>,
        ProjectAPIError,
    >,
) -> Result<(StatusCode, Json<ChangesResponse>), ProjectAPIError> {
    let project_id = ProjectId::parse(&id)?;

    let changes = state
        .project_store
        .write()
        .await
        .update_estimated_revenue(&project_id, request.estimated_revenue)
        .await
        .map_err(|e| ProjectAPIError::StorageError(eyre!(e)))?;

    Ok((StatusCode::OK, Json(ChangesResponse { changes })))
}

#[derive(Debug, PartialEq, Deserialize)]
pub struct UpdateRevenueRequest {
    #[serde(
        default,
        rename = "estimatedRevenue",
        alias = "facturacion_estimada",
        deserialize_with = "deserialize_decimal"
    )]
    pub estimated_revenue: Option<f64>,
}
