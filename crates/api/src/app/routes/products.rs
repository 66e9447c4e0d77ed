use std::sync::Arc;

use axum::{
    extract::{rejection::PathRejection, Extension, Path, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

use catalog_core::ProductId;
use catalog_products::Catalog;

use crate::app::routes::system;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_products).fallback(system::method_not_allowed))
        .route("/:id", get(get_product).fallback(system::method_not_allowed))
}

pub async fn list_products(
    Extension(catalog): Extension<Arc<Catalog>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Response {
    let query = dto::ListProductsQuery::from_pairs(pairs);
    let items = catalog.list(query.category.as_deref());
    (StatusCode::OK, Json(items)).into_response()
}

pub async fn get_product(
    Extension(catalog): Extension<Arc<Catalog>>,
    path: Result<Path<String>, PathRejection>,
) -> Response {
    let Path(id) = match path {
        Ok(path) => path,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "undecodable product id segment");
            return errors::product_not_found();
        }
    };

    let found = id
        .parse::<ProductId>()
        .and_then(|product_id| catalog.get(product_id));

    match found {
        Ok(product) => (StatusCode::OK, Json(product)).into_response(),
        Err(e) => {
            tracing::debug!(id = %id, error = %e, "product lookup missed");
            errors::product_not_found()
        }
    }
}
