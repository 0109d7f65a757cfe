mod render;
mod state;

pub use render::render_dashboard;
pub use state::{DashboardData, DashboardState};
