use axum::{routing::get, Router};

pub mod products;
pub mod system;

/// Router for all catalog endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/", get(system::welcome).fallback(system::method_not_allowed))
        .route(
            "/health",
            get(system::health).fallback(system::method_not_allowed),
        )
        .nest("/products", products::router())
}
