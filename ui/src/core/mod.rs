//! Framework-independent dashboard logic.

pub mod aggregate;
pub mod config;
pub mod error;
pub mod format;
pub mod highlight;
pub mod images;
pub mod insights;
pub mod judges;
pub mod loader;
pub mod model;
pub mod sort;
pub mod state;
pub mod template;

pub use aggregate::{AggregatedView, Aggregator};
pub use config::DashboardConfig;
pub use error::{AggregateError, DatasetError, LoadError};
pub use judges::JudgeSelection;
pub use loader::{load_dashboard, DashboardData};
pub use state::{DashboardState, Notice};
