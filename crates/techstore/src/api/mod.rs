//! # HTTP Interface
//!
//! Maps the store's JSON routes onto the domain clients. Handlers do no business logic
//! of their own: they parse, call one client method, and serialize the outcome.
//!
//! | Area | Routes |
//! |------|--------|
//! | Catalog | `GET /products`, `GET/DELETE /products/{id}`, `POST /addProduct` |
//! | Reviews | `GET /reviews`, `POST /CustomerReviews` |
//! | Orders | `POST/GET /orders`, `GET /orders/{email}`, `PUT/DELETE /orders/{id}`, `GET /order/{id}`, `PUT /payments/{id}` |
//! | Payments | `POST /create-payment-intent` |
//! | Users | `POST/PUT /users`, `GET/PUT /users/{email}`, `GET /users/{email}/admin` |

pub mod catalog;
mod error;
pub mod intents;
pub mod orders;
mod state;
pub mod users;

pub use error::ApiError;
pub use state::AppState;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Largest accepted request body (JSON or multipart).
pub const BODY_LIMIT: usize = 250 * 1024 * 1024;

pub const BANNER: &str = "Technology Store Server Running...";

async fn banner() -> &'static str {
    BANNER
}

/// Returns "ok" if the server is running. Does not check the collections.
async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Builds the full application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(banner))
        .route("/health", get(health))
        .route("/products", get(catalog::list_products))
        .route(
            "/products/{id}",
            get(catalog::find_product).delete(catalog::delete_product),
        )
        .route("/addProduct", post(catalog::add_product))
        .route("/reviews", get(catalog::list_reviews))
        .route("/CustomerReviews", post(catalog::add_review))
        .route("/orders", post(orders::create).get(orders::list_all))
        .route(
            "/orders/{key}",
            get(orders::list_by_email)
                .put(orders::mark_shipped)
                .delete(orders::cancel),
        )
        .route("/order/{id}", get(orders::find))
        .route("/payments/{id}", put(orders::attach_payment))
        .route("/create-payment-intent", post(intents::create_payment_intent))
        .route("/users", post(users::register).put(users::upsert_profile))
        .route(
            "/users/{email}",
            get(users::find_by_email).put(users::grant_admin),
        )
        .route("/users/{email}/admin", get(users::admin_status))
        .layer(DefaultBodyLimit::max(BODY_LIMIT))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
