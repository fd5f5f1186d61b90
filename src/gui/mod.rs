//! GUI module - User interface components

mod app;
mod dashboard_view;
mod sidebar;

pub use app::BikeShareApp;
pub use dashboard_view::{DashboardView, Tab};
pub use sidebar::{Sidebar, SidebarAction};
