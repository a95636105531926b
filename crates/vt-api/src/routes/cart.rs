//! # Cart Routes
//!
//! Routes:
//! - GET    /v1/users/{id}/cart — cart contents and total
//! - POST   /v1/users/{id}/cart — add a product by id
//! - DELETE /v1/users/{id}/cart/{product_id} — remove an item

use axum::extract::{Path, State};
use axum::routing::{delete, get};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use vt_core::{ProductId, UserId};
use vt_store::{CartAdd, CartItem};

use crate::{AppError, AppState};

/// Cart contents with the computed total.
#[derive(Debug, Serialize)]
pub struct CartView {
    /// Items in the cart.
    pub items: Vec<CartItem>,
    /// Sum of item prices.
    pub total: f64,
}

/// Body of an add-to-cart request.
#[derive(Debug, Deserialize)]
pub struct AddToCart {
    /// The product to add.
    pub product_id: String,
}

/// Result of an add-to-cart request.
#[derive(Debug, Serialize)]
pub struct AddResult {
    /// `added` or `already_in_cart`.
    pub status: &'static str,
}

/// Cart router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/users/{id}/cart", get(view_cart).post(add_to_cart))
        .route("/v1/users/{id}/cart/{product_id}", delete(remove_from_cart))
}

async fn view_cart(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CartView>, AppError> {
    let user = UserId(id);
    let items = state.cart.contents(&user).await?;
    let total = items.iter().map(|item| item.price).sum();
    Ok(Json(CartView { items, total }))
}

async fn add_to_cart(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<AddToCart>,
) -> Result<Json<AddResult>, AppError> {
    let product = state
        .store
        .get_product(&ProductId(body.product_id.clone()))
        .await?
        .ok_or(AppError::NotFound(format!("product {}", body.product_id)))?;

    let status = match state.cart.add(&UserId(id), &product).await? {
        CartAdd::Added => "added",
        CartAdd::AlreadyInCart => "already_in_cart",
    };
    Ok(Json(AddResult { status }))
}

async fn remove_from_cart(
    State(state): State<AppState>,
    Path((id, product_id)): Path<(String, String)>,
) -> Result<Json<CartView>, AppError> {
    let user = UserId(id);
    state.cart.remove(&user, &ProductId(product_id)).await?;
    let items = state.cart.contents(&user).await?;
    let total = items.iter().map(|item| item.price).sum();
    Ok(Json(CartView { items, total }))
}
