use std::collections::BTreeMap;

use axum::{extract::State, Json};

use crate::models::Activity;
use crate::registry::SharedRegistry;

/// GET /activities: the full name -> activity mapping.
pub async fn activities_handler(
    State(registry): State<SharedRegistry>,
) -> Json<BTreeMap<String, Activity>> {
    let registry = registry.read().await;
    Json(registry.all().clone())
}
