//! # Product Catalog Routes
//!
//! Routes:
//! - GET /v1/products — list products, optional `q` name filter
//! - GET /v1/products/{id} — fetch one product

use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use vt_core::ProductId;
use vt_store::record::filter_by_name;
use vt_store::Product;

use crate::{AppError, AppState};

/// Query parameters for product listing.
#[derive(Debug, Deserialize)]
pub struct ProductsQuery {
    /// Case-insensitive name filter.
    pub q: Option<String>,
}

/// Product catalog router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/products", get(list_products))
        .route("/v1/products/{id}", get(get_product))
}

async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ProductsQuery>,
) -> Result<Json<Vec<Product>>, AppError> {
    let products = state.store.list_products().await?;
    let products = match query.q.as_deref() {
        Some(q) if !q.is_empty() => filter_by_name(&products, q).into_iter().cloned().collect(),
        _ => products,
    };
    Ok(Json(products))
}

async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, AppError> {
    let product = state
        .store
        .get_product(&ProductId(id.clone()))
        .await?
        .ok_or(AppError::NotFound(format!("product {id}")))?;
    Ok(Json(product))
}
