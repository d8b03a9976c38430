//! Product and review routes.

use super::{ApiError, AppState};
use crate::model::{Product, ProductCreate, Review, ReviewCreate, PRODUCT_FORM_FIELDS};
use axum::extract::multipart::MultipartError;
use axum::extract::{Multipart, Path, State};
use axum::Json;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use collection_actor::{DeleteOutcome, InsertOutcome, ObjectId};
use serde_json::{Map, Value};
use tracing::debug;

impl From<MultipartError> for ApiError {
    fn from(e: MultipartError) -> Self {
        ApiError::BadRequest(e.body_text())
    }
}

pub async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<Product>>, ApiError> {
    Ok(Json(state.products().list_all().await?))
}

pub async fn find_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Option<Product>>, ApiError> {
    Ok(Json(state.products().find(&id).await?))
}

pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteOutcome>, ApiError> {
    Ok(Json(state.products().delete(&id).await?))
}

/// Multipart form: the known text fields plus an `image` file, stored base64-encoded.
/// Unknown fields are ignored.
pub async fn add_product(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<InsertOutcome<ObjectId>>, ApiError> {
    let mut fields = Map::new();
    let mut image = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        if name == "image" {
            let bytes = field.bytes().await?;
            debug!(size = bytes.len(), "Product image received");
            image = Some(BASE64.encode(&bytes));
        } else if PRODUCT_FORM_FIELDS.contains(&name.as_str()) {
            let text = field.text().await?;
            fields.insert(name, Value::String(text));
        }
    }

    let image = image.ok_or_else(|| ApiError::BadRequest("image file is required".to_string()))?;
    let product = state
        .products()
        .add(ProductCreate::with_image(fields, image))
        .await?;
    Ok(Json(InsertOutcome::new(product.id)))
}

pub async fn list_reviews(State(state): State<AppState>) -> Result<Json<Vec<Review>>, ApiError> {
    Ok(Json(state.reviews().list_all().await?))
}

pub async fn add_review(
    State(state): State<AppState>,
    Json(params): Json<ReviewCreate>,
) -> Result<Json<InsertOutcome<ObjectId>>, ApiError> {
    let review = state.reviews().add(params).await?;
    Ok(Json(InsertOutcome::new(review.id)))
}
