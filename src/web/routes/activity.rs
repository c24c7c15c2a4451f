use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::warn;

use crate::registry::{RegistryError, SharedRegistry};

#[derive(Debug, Deserialize)]
pub struct RosterQuery {
    pub email: String,
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<RosterQuery>,
    State(registry): State<SharedRegistry>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let mut registry = registry.write().await;
    match registry.signup(&activity_name, &query.email) {
        Ok(message) => Ok(Json(json!({ "message": message }))),
        Err(e) => {
            warn!(activity = %activity_name, email = %query.email, "signup rejected: {}", e);
            Err(reject(e))
        }
    }
}

pub async fn unregister_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<RosterQuery>,
    State(registry): State<SharedRegistry>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let mut registry = registry.write().await;
    match registry.unregister(&activity_name, &query.email) {
        Ok(message) => Ok(Json(json!({ "message": message }))),
        Err(e) => {
            warn!(activity = %activity_name, email = %query.email, "unregister rejected: {}", e);
            Err(reject(e))
        }
    }
}

fn reject(err: RegistryError) -> (StatusCode, Json<Value>) {
    let status = match err {
        RegistryError::UnknownActivity => StatusCode::NOT_FOUND,
        RegistryError::AlreadySignedUp | RegistryError::NotSignedUp => StatusCode::BAD_REQUEST,
    };
    (status, Json(json!({ "detail": err.to_string() })))
}
