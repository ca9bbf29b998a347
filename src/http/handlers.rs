//! Product route handlers.
//!
//! Handlers validate what they can synchronously, call the store once, and
//! shape the outcome. Store errors become 500s through [`ApiError`].

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};

use crate::http::error::ApiError;
use crate::http::request::{BodyRejection, JsonOrForm};
use crate::http::response::{ProductBody, ProductDeleted, ProductList, ProductUpdated};
use crate::http::server::AppState;
use crate::products::{ProductDraft, ProductId, ProductPatch, ProductQuery};

/// `GET /`
pub async fn welcome() -> &'static str {
    "Bienvenidos"
}

/// `GET /products`
pub async fn list_products(
    State(state): State<AppState>,
    query: Result<Query<ProductQuery>, QueryRejection>,
) -> Result<Json<ProductList>, ApiError> {
    let Query(query) = query.map_err(|e| ApiError::BadQuery(e.body_text()))?;
    let products = state.store.get_products(&query).await?;
    Ok(Json(ProductList::new(products)))
}

/// `GET /products/{pid}`
pub async fn get_product(
    State(state): State<AppState>,
    Path(pid): Path<String>,
) -> Result<Json<ProductBody>, ApiError> {
    let id = parse_pid(&pid).ok_or(ApiError::ProductNotFound)?;
    match state.store.get_product_by_id(id).await? {
        Some(product) => Ok(Json(ProductBody::found(product))),
        None => Err(ApiError::ProductNotFound),
    }
}

/// `POST /products`
///
/// Accepts a JSON or form-encoded body. The presence check runs before the
/// store is touched.
pub async fn create_product(
    State(state): State<AppState>,
    body: Result<JsonOrForm<ProductDraft>, BodyRejection>,
) -> Result<Json<ProductBody>, ApiError> {
    let JsonOrForm(draft) = body.map_err(|e| {
        tracing::debug!(error = %e, "Unreadable product body");
        ApiError::MissingData
    })?;
    let product = draft.into_new_product().ok_or(ApiError::MissingData)?;

    let product = state.store.add_product(product).await?;
    Ok(Json(ProductBody::added(product)))
}

/// `DELETE /products/{pid}`
pub async fn delete_product(
    State(state): State<AppState>,
    Path(pid): Path<String>,
) -> Result<Json<ProductDeleted>, ApiError> {
    let id = parse_pid(&pid).ok_or(ApiError::ProductNotFound)?;
    match state.store.delete_product(id).await? {
        Some(product) => Ok(Json(ProductDeleted::new(product))),
        None => Err(ApiError::ProductNotFound),
    }
}

/// `PUT /products/{pid}`
pub async fn update_product(
    State(state): State<AppState>,
    Path(pid): Path<String>,
    body: Result<JsonOrForm<ProductPatch>, BodyRejection>,
) -> Result<Json<ProductUpdated>, ApiError> {
    let id = parse_pid(&pid).ok_or(ApiError::UpdateRejected)?;
    let JsonOrForm(patch) = body.map_err(|e| {
        tracing::debug!(error = %e, "Unreadable product patch");
        ApiError::UpdateRejected
    })?;

    match state.store.update_product(id, patch).await? {
        Some(product) => Ok(Json(ProductUpdated::new(product))),
        None => Err(ApiError::UpdateRejected),
    }
}

/// "Not a number" and "no such product" answer the same; only the log tells them apart.
fn parse_pid(raw: &str) -> Option<ProductId> {
    match ProductId::parse(raw) {
        Ok(id) => Some(id),
        Err(e) => {
            tracing::debug!(error = %e, "Product id is not a number");
            None
        }
    }
}
