//! Order routes.
//!
//! `/orders/{key}` is shared: `GET` reads the segment as an email, `PUT` and `DELETE`
//! read it as an order id.

use super::{ApiError, AppState};
use crate::model::{Order, OrderCreate, PaymentRecord};
use axum::extract::{Path, State};
use axum::Json;
use collection_actor::{DeleteOutcome, InsertOutcome, ObjectId, UpdateOutcome};
use serde_json::Value;

pub async fn create(
    State(state): State<AppState>,
    Json(params): Json<OrderCreate>,
) -> Result<Json<InsertOutcome<ObjectId>>, ApiError> {
    let order = state.orders().create(params).await?;
    Ok(Json(InsertOutcome::new(order.id)))
}

pub async fn list_all(State(state): State<AppState>) -> Result<Json<Vec<Order>>, ApiError> {
    Ok(Json(state.orders().list_all().await?))
}

pub async fn list_by_email(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<Vec<Order>>, ApiError> {
    Ok(Json(state.orders().list_by_email(&email).await?))
}

/// `null` when no order has this id.
pub async fn find(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Option<Order>>, ApiError> {
    Ok(Json(state.orders().find(&id).await?))
}

pub async fn cancel(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteOutcome>, ApiError> {
    Ok(Json(state.orders().cancel(&id).await?))
}

pub async fn mark_shipped(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<UpdateOutcome<ObjectId>>, ApiError> {
    Ok(Json(state.orders().mark_shipped(&id).await?))
}

pub async fn attach_payment(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(record): Json<Value>,
) -> Result<Json<UpdateOutcome<ObjectId>>, ApiError> {
    let outcome = state
        .orders()
        .attach_payment(&id, PaymentRecord(record))
        .await?;
    Ok(Json(outcome))
}
