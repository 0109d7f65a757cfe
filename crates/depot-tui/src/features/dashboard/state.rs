//! Dashboard data, loaded as one unit.

use depot_types::{InventorySummary, LowStockItem};

/// Everything the dashboard shows, fetched together by one refresh task.
#[derive(Debug, Clone, Default)]
pub struct DashboardData {
    pub summary: InventorySummary,
    pub low_stock: Vec<LowStockItem>,
}

#[derive(Debug, Default)]
pub struct DashboardState {
    /// Last successful load; kept on refresh failure so the screen does not
    /// blank out under a transient error.
    pub data: Option<DashboardData>,
}
