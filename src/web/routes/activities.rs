use std::collections::BTreeMap;

use axum::{extract::State, Json};

use crate::models::Activity;
use crate::registry::SharedRegistry;

/// Full registry snapshot, keyed by activity name. No filtering, no
/// pagination.
pub async fn activities_handler(
    State(registry): State<SharedRegistry>,
) -> Json<BTreeMap<String, Activity>> {
    Json(registry.snapshot().await)
}
