use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::warn;

use crate::models::Activity;
use crate::services::signup_service;
use crate::store::{SharedRegistry, SignupError};

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    // Kept optional so a missing parameter gets our own 422 instead of the
    // extractor's generic rejection.
    email: Option<String>,
}

pub async fn activities_handler(
    State(registry): State<SharedRegistry>,
) -> Json<IndexMap<String, Activity>> {
    Json(signup_service::list_activities(&registry).await)
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
    State(registry): State<SharedRegistry>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let Some(email) = query.email else {
        return Err(missing_email());
    };

    match signup_service::signup(&registry, &activity_name, &email).await {
        Ok(message) => Ok(Json(json!({ "message": message }))),
        Err(e) => {
            warn!("Signup failed for {}: {}", activity_name, e);
            Err(domain_error(e))
        }
    }
}

pub async fn unregister_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
    State(registry): State<SharedRegistry>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let Some(email) = query.email else {
        return Err(missing_email());
    };

    match signup_service::unregister(&registry, &activity_name, &email).await {
        Ok(message) => Ok(Json(json!({ "message": message }))),
        Err(e) => {
            warn!("Unregister failed for {}: {}", activity_name, e);
            Err(domain_error(e))
        }
    }
}

fn missing_email() -> (StatusCode, Json<Value>) {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(json!({ "detail": "Query parameter 'email' is required" })),
    )
}

fn domain_error(e: SignupError) -> (StatusCode, Json<Value>) {
    let status = match e {
        SignupError::NotFound => StatusCode::NOT_FOUND,
        SignupError::AlreadySignedUp | SignupError::NotRegistered => StatusCode::BAD_REQUEST,
    };
    (status, Json(json!({ "detail": e.to_string() })))
}
