//! Typed per-resource operations.
//!
//! Thin wrappers pairing an endpoint with its request/response types. All of
//! them except `login`/`register` require a stored session, since the paths
//! themselves are user-scoped.

use depot_types::{
    Ack, Category, Credentials, InventorySummary, LoginResponse, LowStockItem, NewCategory,
    NewOrder, NewProduct, NewSupplier, Order, OrderSummary, OrdersByStatus, PopularProduct,
    Product, Session, StockItem, StockStats, StockUpdate, Supplier, SupplierProduct,
};
use reqwest::Method;
use serde_json::Value;

use super::{ApiClient, ApiError, endpoints};

impl ApiClient {
    /// The id the user-scoped paths are built from.
    fn user_id(&self) -> Result<i64, ApiError> {
        self.auth()
            .session()
            .map(|s| s.user.id)
            .ok_or(ApiError::NotAuthenticated)
    }

    // ------------------------------------------------------------------
    // Session
    // ------------------------------------------------------------------

    /// Logs in and stores the returned session locally.
    ///
    /// A 401 here means bad credentials, not a stale session, so it is
    /// reported as a plain status error instead of `SessionExpired`.
    pub async fn login(&self, credentials: &Credentials) -> Result<Session, ApiError> {
        let response: LoginResponse = match self.post(endpoints::LOGIN, credentials).await {
            Err(ApiError::SessionExpired) => Err(ApiError::Status {
                status: 401,
                message: "invalid username or password".to_string(),
            }),
            other => other,
        }?;
        let session = response.into_session();
        self.auth().login(&session);
        Ok(session)
    }

    pub async fn register(&self, credentials: &Credentials) -> Result<Ack, ApiError> {
        self.post(endpoints::REGISTER, credentials).await
    }

    // ------------------------------------------------------------------
    // Categories
    // ------------------------------------------------------------------

    pub async fn categories(&self) -> Result<Vec<Category>, ApiError> {
        let uid = self.user_id()?;
        self.get(&endpoints::categories(uid)).await
    }

    pub async fn category(&self, category_id: i64) -> Result<Category, ApiError> {
        let uid = self.user_id()?;
        self.get(&endpoints::category(uid, category_id)).await
    }

    pub async fn create_category(&self, category: &NewCategory) -> Result<Ack, ApiError> {
        let uid = self.user_id()?;
        self.post(&endpoints::categories(uid), category).await
    }

    pub async fn update_category(
        &self,
        category_id: i64,
        category: &NewCategory,
    ) -> Result<Ack, ApiError> {
        let uid = self.user_id()?;
        self.put(&endpoints::category(uid, category_id), category)
            .await
    }

    pub async fn delete_category(&self, category_id: i64) -> Result<Ack, ApiError> {
        let uid = self.user_id()?;
        self.delete(&endpoints::category(uid, category_id)).await
    }

    // ------------------------------------------------------------------
    // Products
    // ------------------------------------------------------------------

    /// The listing is the only product read the backend offers; single
    /// products and per-category views are derived from it client-side.
    pub async fn products(&self) -> Result<Vec<Product>, ApiError> {
        let uid = self.user_id()?;
        self.get(&endpoints::products(uid)).await
    }

    pub async fn create_product(&self, product: &NewProduct) -> Result<Ack, ApiError> {
        let uid = self.user_id()?;
        self.post(&endpoints::products(uid), product).await
    }

    pub async fn update_product(
        &self,
        product_id: i64,
        product: &NewProduct,
    ) -> Result<Ack, ApiError> {
        let uid = self.user_id()?;
        self.put(&endpoints::product(uid, product_id), product).await
    }

    pub async fn delete_product(&self, product_id: i64) -> Result<Ack, ApiError> {
        let uid = self.user_id()?;
        self.delete(&endpoints::product(uid, product_id)).await
    }

    // ------------------------------------------------------------------
    // Inventory
    // ------------------------------------------------------------------

    pub async fn stock(&self) -> Result<Vec<StockItem>, ApiError> {
        let uid = self.user_id()?;
        self.get(&endpoints::stock(uid)).await
    }

    pub async fn update_stock(&self, product_id: i64, quantity: i64) -> Result<Ack, ApiError> {
        let uid = self.user_id()?;
        self.put(
            &endpoints::stock_item(uid, product_id),
            &StockUpdate { quantity },
        )
        .await
    }

    pub async fn low_stock(&self) -> Result<Vec<LowStockItem>, ApiError> {
        let uid = self.user_id()?;
        self.get(&endpoints::stock_alert(uid)).await
    }

    pub async fn stock_stats(&self) -> Result<StockStats, ApiError> {
        let uid = self.user_id()?;
        self.get(&endpoints::stock_stats(uid)).await
    }

    // ------------------------------------------------------------------
    // Suppliers
    // ------------------------------------------------------------------

    pub async fn suppliers(&self) -> Result<Vec<Supplier>, ApiError> {
        let uid = self.user_id()?;
        self.get(&endpoints::suppliers(uid)).await
    }

    pub async fn create_supplier(&self, supplier: &NewSupplier) -> Result<Ack, ApiError> {
        let uid = self.user_id()?;
        self.post(&endpoints::suppliers(uid), supplier).await
    }

    pub async fn delete_supplier(&self, supplier_id: i64) -> Result<Ack, ApiError> {
        let uid = self.user_id()?;
        self.delete(&endpoints::supplier(uid, supplier_id)).await
    }

    /// Links a product to a supplier. The backend takes no body here.
    pub async fn link_supplier_product(
        &self,
        supplier_id: i64,
        product_id: i64,
    ) -> Result<Ack, ApiError> {
        let uid = self.user_id()?;
        self.request::<Ack, Value>(
            Method::POST,
            &endpoints::supplier_product_link(uid, supplier_id, product_id),
            None,
        )
        .await
    }

    pub async fn unlink_supplier_product(
        &self,
        supplier_id: i64,
        product_id: i64,
    ) -> Result<Ack, ApiError> {
        let uid = self.user_id()?;
        self.delete(&endpoints::supplier_product_link(uid, supplier_id, product_id))
            .await
    }

    pub async fn supplier_products(
        &self,
        supplier_id: i64,
    ) -> Result<Vec<SupplierProduct>, ApiError> {
        let uid = self.user_id()?;
        self.get(&endpoints::supplier_products(uid, supplier_id))
            .await
    }

    pub async fn product_suppliers(&self, product_id: i64) -> Result<Vec<Supplier>, ApiError> {
        let uid = self.user_id()?;
        self.get(&endpoints::product_suppliers(uid, product_id))
            .await
    }

    // ------------------------------------------------------------------
    // Orders
    // ------------------------------------------------------------------

    pub async fn orders(&self) -> Result<Vec<OrderSummary>, ApiError> {
        let uid = self.user_id()?;
        self.get(&endpoints::orders(uid)).await
    }

    pub async fn order(&self, order_id: i64) -> Result<Order, ApiError> {
        let uid = self.user_id()?;
        self.get(&endpoints::order(uid, order_id)).await
    }

    pub async fn create_order(&self, order: &NewOrder) -> Result<Ack, ApiError> {
        let uid = self.user_id()?;
        self.post(&endpoints::orders(uid), order).await
    }

    /// Confirms a pending order; the backend moves stock as a side effect.
    pub async fn confirm_order(&self, order_id: i64) -> Result<Ack, ApiError> {
        let uid = self.user_id()?;
        self.request::<Ack, Value>(Method::PUT, &endpoints::order_confirm(uid, order_id), None)
            .await
    }

    pub async fn delete_order(&self, order_id: i64) -> Result<Ack, ApiError> {
        let uid = self.user_id()?;
        self.delete(&endpoints::order(uid, order_id)).await
    }

    // ------------------------------------------------------------------
    // Reports
    // ------------------------------------------------------------------

    pub async fn popular_products(&self, limit: u32) -> Result<Vec<PopularProduct>, ApiError> {
        let uid = self.user_id()?;
        let path = format!("{}?limit={limit}", endpoints::report_popular(uid));
        self.get(&path).await
    }

    pub async fn inventory_summary(&self) -> Result<InventorySummary, ApiError> {
        let uid = self.user_id()?;
        self.get(&endpoints::report_inventory(uid)).await
    }

    pub async fn orders_by_status(&self) -> Result<OrdersByStatus, ApiError> {
        let uid = self.user_id()?;
        self.get(&endpoints::report_orders_by_status(uid)).await
    }
}
