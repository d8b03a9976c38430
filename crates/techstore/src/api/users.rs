//! User routes.
//!
//! None of these check who is calling. `PUT /users/{email}` promotes any account.

use super::{ApiError, AppState};
use crate::model::{User, UserProfile};
use axum::extract::{Path, State};
use axum::Json;
use collection_actor::{InsertOutcome, ObjectId, UpdateOutcome};
use serde::Serialize;
use serde_json::{Map, Value};

#[derive(Debug, Serialize)]
pub struct AdminStatus {
    pub admin: bool,
}

fn profile_from_body(body: Map<String, Value>) -> Result<UserProfile, ApiError> {
    UserProfile::from_body(body).ok_or_else(|| ApiError::BadRequest("email is required".to_string()))
}

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<Map<String, Value>>,
) -> Result<Json<InsertOutcome<ObjectId>>, ApiError> {
    let user = state.users().register(profile_from_body(body)?).await?;
    Ok(Json(InsertOutcome::new(user.id)))
}

pub async fn upsert_profile(
    State(state): State<AppState>,
    Json(body): Json<Map<String, Value>>,
) -> Result<Json<UpdateOutcome<ObjectId>>, ApiError> {
    let outcome = state.users().upsert_profile(profile_from_body(body)?).await?;
    Ok(Json(outcome))
}

pub async fn grant_admin(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<UpdateOutcome<ObjectId>>, ApiError> {
    Ok(Json(state.users().grant_admin(&email).await?))
}

pub async fn find_by_email(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<Option<User>>, ApiError> {
    Ok(Json(state.users().find_by_email(&email).await?))
}

pub async fn admin_status(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<AdminStatus>, ApiError> {
    let admin = state.users().is_admin(&email).await?;
    Ok(Json(AdminStatus { admin }))
}
