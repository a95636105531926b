//! # Document Shapes
//!
//! The record types held in the document store. Field names follow the
//! store's wire format (camelCase) so documents round-trip unchanged.

use serde::{Deserialize, Serialize};

use vt_core::{ProductId, Timestamp};

/// A product in the marketplace catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Stable product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Asking price.
    pub price: f64,
    /// Image URL.
    pub image: Option<String>,
    /// Condition description (e.g., "Like new").
    pub condition: Option<String>,
    /// Display name of the selling owner.
    pub owner: Option<String>,
    /// Verification sources for this product. Only the first badge is
    /// displayed: an owner cannot be verified by multiple sources for
    /// the same product.
    #[serde(default)]
    pub verification_badges: Vec<String>,
}

impl Product {
    /// The displayed verification source, if the product has one.
    pub fn verification_source(&self) -> Option<&str> {
        self.verification_badges.first().map(String::as_str)
    }
}

/// One item in a user's cart.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// The product this item refers to.
    pub product_id: ProductId,
    /// Product name at the time of adding.
    pub name: String,
    /// Price at the time of adding.
    pub price: f64,
    /// Image URL at the time of adding.
    pub image: Option<String>,
    /// Condition at the time of adding.
    pub condition: Option<String>,
    /// Seller display name at the time of adding.
    pub owner: Option<String>,
    /// When the item was added.
    pub added_at: Timestamp,
}

impl CartItem {
    /// Snapshot a product into a cart item.
    pub fn from_product(product: &Product) -> Self {
        Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            condition: product.condition.clone(),
            owner: product.owner.clone(),
            added_at: Timestamp::now(),
        }
    }
}

/// A user document. Read and written whole.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// When the document was created.
    pub created_at: Timestamp,
    /// Display name.
    pub name: Option<String>,
    /// Avatar URL.
    pub avatar: Option<String>,
    /// The cart contents.
    #[serde(default)]
    pub cart: Vec<CartItem>,
    /// Completed purchase orders (opaque to this crate).
    #[serde(default)]
    pub orders: Vec<serde_json::Value>,
    /// Listings this user is selling.
    #[serde(default)]
    pub selling_products: Vec<crate::listing::Listing>,
}

impl UserRecord {
    /// A minimal document for a user seen for the first time.
    pub fn minimal() -> Self {
        Self {
            created_at: Timestamp::now(),
            name: None,
            avatar: None,
            cart: Vec::new(),
            orders: Vec::new(),
            selling_products: Vec::new(),
        }
    }
}

/// Case-insensitive product-name filter for catalog search.
pub fn filter_by_name<'a>(products: &'a [Product], query: &str) -> Vec<&'a Product> {
    let needle = query.to_lowercase();
    products
        .iter()
        .filter(|p| p.name.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(name: &str) -> Product {
        Product {
            id: ProductId(name.to_lowercase()),
            name: name.into(),
            price: 100.0,
            image: None,
            condition: Some("Like new".into()),
            owner: Some("seller".into()),
            verification_badges: vec![],
        }
    }

    #[test]
    fn test_first_badge_is_displayed_source() {
        let mut p = product("Widget");
        assert!(p.verification_source().is_none());
        p.verification_badges = vec!["Rare-T".into(), "PepperStore".into()];
        assert_eq!(p.verification_source(), Some("Rare-T"));
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let products = vec![product("Retro Widget"), product("Gadget")];
        let hits = filter_by_name(&products, "widget");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Retro Widget");
        assert_eq!(filter_by_name(&products, "").len(), 2);
    }

    #[test]
    fn test_cart_item_snapshots_product() {
        let item = CartItem::from_product(&product("Widget"));
        assert_eq!(item.name, "Widget");
        assert_eq!(item.product_id.as_str(), "widget");
    }

    #[test]
    fn test_user_record_serde_wire_names() {
        let user = UserRecord::minimal();
        let wire = serde_json::to_value(&user).unwrap();
        assert!(wire.get("createdAt").is_some());
        assert!(wire.get("sellingProducts").is_some());
    }
}
