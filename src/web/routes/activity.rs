use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::models::Activity;
use crate::registry::SharedRegistry;
use crate::services::activity_service::{
    self, CurrentParticipantsView, DescriptionView, MaxParticipantsView, ScheduleView,
    SignupConfirmation,
};
use crate::web::error::ApiError;

pub async fn activity_detail_handler(
    Path(name): Path<String>,
    State(registry): State<SharedRegistry>,
) -> Result<Json<Activity>, ApiError> {
    Ok(Json(registry.get(&name).await?))
}

pub async fn participants_handler(
    Path(name): Path<String>,
    State(registry): State<SharedRegistry>,
) -> Result<Json<Vec<String>>, ApiError> {
    Ok(Json(registry.participants(&name).await?))
}

pub async fn schedule_handler(
    Path(name): Path<String>,
    State(registry): State<SharedRegistry>,
) -> Result<Json<ScheduleView>, ApiError> {
    Ok(Json(activity_service::schedule_view(&registry, &name).await?))
}

pub async fn description_handler(
    Path(name): Path<String>,
    State(registry): State<SharedRegistry>,
) -> Result<Json<DescriptionView>, ApiError> {
    Ok(Json(
        activity_service::description_view(&registry, &name).await?,
    ))
}

pub async fn max_participants_handler(
    Path(name): Path<String>,
    State(registry): State<SharedRegistry>,
) -> Result<Json<MaxParticipantsView>, ApiError> {
    Ok(Json(
        activity_service::max_participants_view(&registry, &name).await?,
    ))
}

pub async fn current_participants_handler(
    Path(name): Path<String>,
    State(registry): State<SharedRegistry>,
) -> Result<Json<CurrentParticipantsView>, ApiError> {
    Ok(Json(
        activity_service::current_participants_view(&registry, &name).await?,
    ))
}

#[derive(Debug, Deserialize)]
pub struct SignupQuery {
    pub email: String,
}

/// Sign a student up for an activity. The email arrives as a query
/// parameter; a missing one is rejected by the extractor as a client error.
pub async fn signup_handler(
    Path(name): Path<String>,
    Query(query): Query<SignupQuery>,
    State(registry): State<SharedRegistry>,
) -> Result<Json<SignupConfirmation>, ApiError> {
    Ok(Json(
        activity_service::sign_up(&registry, &name, &query.email).await?,
    ))
}
