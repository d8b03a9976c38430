//! HTTP error mapping.

use crate::order_actor::OrderError;
use crate::payments::PaymentError;
use crate::product_actor::ProductError;
use crate::review_actor::ReviewError;
use crate::user_actor::UserError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Every failure a handler can return.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Order(#[from] OrderError),

    #[error(transparent)]
    User(#[from] UserError),

    #[error(transparent)]
    Product(#[from] ProductError),

    #[error(transparent)]
    Review(#[from] ReviewError),

    #[error(transparent)]
    Payment(#[from] PaymentError),

    /// The request itself is unusable (missing email, broken multipart body).
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Order(OrderError::MalformedId(_))
            | Self::Product(ProductError::MalformedId(_))
            | Self::Payment(PaymentError::InvalidAmount(_))
            | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Order(OrderError::NotFound(_)) => StatusCode::NOT_FOUND,
            Self::Order(OrderError::StoreUnavailable(_))
            | Self::User(UserError::StoreUnavailable(_))
            | Self::Product(ProductError::StoreUnavailable(_))
            | Self::Review(ReviewError::StoreUnavailable(_)) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Payment(PaymentError::ProcessorUnavailable(_)) => StatusCode::BAD_GATEWAY,
        }
    }

    // Don't expose internal error details to clients
    fn public_message(&self) -> String {
        match self.status() {
            StatusCode::SERVICE_UNAVAILABLE => "Store unavailable".to_string(),
            StatusCode::BAD_GATEWAY => "Payment processor unavailable".to_string(),
            _ => self.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, status = status.as_u16(), "Request error");
        }

        let body = Json(json!({ "error": self.public_message() }));
        (status, body).into_response()
    }
}
