//! Shared wire types for the depot inventory backend.
//!
//! Every struct here mirrors the JSON the backend actually emits or accepts,
//! field for field. The backend wraps most list payloads in a `{"data": ...}`
//! envelope (detail and aggregate routes answer flat) and returns
//! acknowledgements (`{"message": ...}`) for mutations; both shapes are
//! handled by the API client in `depot-core`, so these types only model the
//! payloads themselves.
//!
//! List rows and detail rows are distinct shapes on this backend. A supplier
//! in the listing carries a `product_count`; the same supplier looked up
//! through a product does not. Where the shapes differ the types are split
//! rather than papered over with options.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// ============================================================================
// Session
// ============================================================================

/// The user profile half of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub username: String,
}

/// A client-held session: auth token plus the profile it belongs to.
///
/// Token and user are set and cleared together; a token without a profile
/// (or vice versa) is treated as no session at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: UserProfile,
}

/// Login/register request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Successful login response. The backend returns the profile fields
/// flattened next to the token rather than nested.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
    pub user_id: i64,
}

impl LoginResponse {
    /// Folds the flat login response into the session shape the client stores.
    pub fn into_session(self) -> Session {
        Session {
            token: self.token,
            user: UserProfile {
                id: self.user_id,
                username: self.username,
            },
        }
    }
}

/// Generic acknowledgement for mutations.
///
/// `order_id` is only present on order creation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Ack {
    pub message: Option<String>,
    pub order_id: Option<i64>,
}

// ============================================================================
// Catalog
// ============================================================================

/// A product category ("clasificacion" on the wire).
///
/// The listing adds a `product_count` per row; the detail route omits it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    /// The backend field name is Spanish; kept verbatim for wire fidelity.
    #[serde(default)]
    pub descripcion: String,
    #[serde(default)]
    pub product_count: Option<i64>,
}

/// Category creation/update body.
#[derive(Debug, Clone, Serialize)]
pub struct NewCategory {
    pub name: String,
    pub descripcion: String,
}

/// A product ("articulo" on the wire) as the listing emits it. The backend
/// joins in the category name and current stock level per row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub category_id: i64,
    #[serde(default)]
    pub category_name: String,
    #[serde(default)]
    pub stock: i64,
}

/// Product creation/update body.
///
/// `quantity` seeds the initial stock on creation; the update route ignores
/// it, so it is omitted from the body when unset.
#[derive(Debug, Clone, Serialize)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub category_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
}

// ============================================================================
// Inventory
// ============================================================================

/// One row of the inventory listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockItem {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub category_name: String,
    pub quantity: i64,
    pub category_id: Option<i64>,
}

/// One row of the low-stock alert listing, a slimmer shape than the full
/// inventory row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LowStockItem {
    pub id: i64,
    pub name: String,
    pub quantity: i64,
    pub category_name: String,
}

/// Body for a stock quantity update.
#[derive(Debug, Clone, Serialize)]
pub struct StockUpdate {
    pub quantity: i64,
}

/// Aggregate inventory statistics. Answered flat, no data envelope.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StockStats {
    pub total_products: i64,
    pub total_units: i64,
    pub low_stock: i64,
    pub out_of_stock: i64,
}

// ============================================================================
// Suppliers
// ============================================================================

/// A supplier ("distribuidor" on the wire).
///
/// The listing includes `contact` and `product_count`; the per-product
/// supplier lookup omits both, so they default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub contact: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub product_count: Option<i64>,
}

/// One row of a supplier's product listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplierProduct {
    pub id: i64,
    pub name: String,
    pub price: f64,
}

/// Supplier creation body.
#[derive(Debug, Clone, Serialize)]
pub struct NewSupplier {
    pub name: String,
    pub phone: String,
    pub email: String,
}

// ============================================================================
// Orders
// ============================================================================

/// Purchase order status.
///
/// The backend stores `deleted` rather than removing rows; deleted orders
/// are filtered out of the listing server-side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Completed,
    Deleted,
    /// Any status this client version does not know about.
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Completed => "completed",
            OrderStatus::Deleted => "deleted",
            OrderStatus::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

/// One row of the order listing. Lines are summarized as a count here; the
/// detail route expands them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OrderSummary {
    pub id: i64,
    pub order_date: Option<String>,
    pub received_date: Option<String>,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default)]
    pub product_count: i64,
}

/// One line of an order detail, with the product name joined in.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OrderLine {
    pub product_id: i64,
    #[serde(default)]
    pub product_name: String,
    pub quantity: i64,
}

/// A full purchase order. Answered flat, no data envelope. Dates are plain
/// `YYYY-MM-DD` strings on the wire.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Order {
    pub id: i64,
    pub order_date: Option<String>,
    pub received_date: Option<String>,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default)]
    pub products: Vec<OrderLine>,
}

/// One requested line of a new order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewOrderItem {
    pub product_id: i64,
    pub quantity: i64,
}

/// Order creation body.
#[derive(Debug, Clone, Serialize)]
pub struct NewOrder {
    pub items: Vec<NewOrderItem>,
}

// ============================================================================
// Reports
// ============================================================================

/// One row of the popular-products report, ranked by units ordered.
#[derive(Debug, Clone, Deserialize)]
pub struct PopularProduct {
    pub id: i64,
    pub name: String,
    pub total_ordered: i64,
}

/// A low-stock row inside the inventory summary. This report names its
/// fields in Spanish, unlike the alert listing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LowStockSummary {
    pub id: i64,
    pub nombre: String,
    pub cantidad: i64,
    pub categoria: String,
}

/// The inventory summary report. Answered flat, no data envelope.
///
/// `by_category` maps category name to product count; a `BTreeMap` keeps
/// the display order stable.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct InventorySummary {
    pub total_products: i64,
    pub total_units: i64,
    pub low_stock_count: i64,
    pub out_of_stock_count: i64,
    pub low_stock_products: Vec<LowStockSummary>,
    pub by_category: BTreeMap<String, i64>,
}

/// The orders-by-status report: status name to order count.
pub type OrdersByStatus = BTreeMap<String, i64>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_response_folds_into_session() {
        let resp: LoginResponse =
            serde_json::from_str(r#"{"token":"t1","username":"alice","user_id":7}"#).unwrap();
        let session = resp.into_session();
        assert_eq!(session.token, "t1");
        assert_eq!(session.user.id, 7);
        assert_eq!(session.user.username, "alice");
    }

    #[test]
    fn order_status_unknown_fallback() {
        let status: OrderStatus = serde_json::from_str(r#""shipped""#).unwrap();
        assert_eq!(status, OrderStatus::Unknown);
        let status: OrderStatus = serde_json::from_str(r#""deleted""#).unwrap();
        assert_eq!(status, OrderStatus::Deleted);
    }

    #[test]
    fn order_list_row_carries_line_count() {
        let row: OrderSummary = serde_json::from_str(
            r#"{"id":3,"order_date":"2026-01-15","received_date":null,"status":"pending","product_count":4}"#,
        )
        .unwrap();
        assert_eq!(row.status, OrderStatus::Pending);
        assert_eq!(row.product_count, 4);
    }

    #[test]
    fn order_detail_expands_named_lines() {
        let order: Order = serde_json::from_str(
            r#"{"id":3,"order_date":"2026-01-15","received_date":null,"status":"pending","products":[{"product_id":1,"product_name":"Hammer","quantity":4}]}"#,
        )
        .unwrap();
        assert_eq!(order.products.len(), 1);
        assert_eq!(order.products[0].product_name, "Hammer");
    }

    #[test]
    fn supplier_decodes_with_and_without_listing_extras() {
        let full: Supplier = serde_json::from_str(
            r#"{"id":1,"name":"Acme","contact":"","phone":"1143215678","email":"v@acme.com","product_count":3}"#,
        )
        .unwrap();
        assert_eq!(full.product_count, Some(3));

        // The per-product lookup emits only id/name/phone/email.
        let slim: Supplier = serde_json::from_str(
            r#"{"id":1,"name":"Acme","phone":"1143215678","email":"v@acme.com"}"#,
        )
        .unwrap();
        assert_eq!(slim.name, "Acme");
        assert_eq!(slim.product_count, None);
    }

    #[test]
    fn new_supplier_serializes_backend_field_names() {
        let body = serde_json::to_value(NewSupplier {
            name: "Acme".to_string(),
            phone: "1143215678".to_string(),
            email: "v@acme.com".to_string(),
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({"name":"Acme","phone":"1143215678","email":"v@acme.com"})
        );
    }

    #[test]
    fn new_product_omits_unset_quantity() {
        let body = serde_json::to_value(NewProduct {
            name: "Hammer".to_string(),
            price: 9.5,
            category_id: 2,
            quantity: None,
        })
        .unwrap();
        assert!(body.get("quantity").is_none());
    }

    #[test]
    fn inventory_summary_decodes_category_map() {
        let summary: InventorySummary = serde_json::from_str(
            r#"{"total_products":5,"total_units":40,"low_stock_count":2,"out_of_stock_count":1,
                "low_stock_products":[{"id":3,"nombre":"Clavos","cantidad":2,"categoria":"Ferretería"}],
                "by_category":{"Ferretería":3,"Sin categoría":2}}"#,
        )
        .unwrap();
        assert_eq!(summary.low_stock_products[0].nombre, "Clavos");
        assert_eq!(summary.by_category.get("Ferretería"), Some(&3));
    }
}
