pub mod app;
pub mod calendar;
pub mod detail;
pub mod errors;
pub mod handlers;
pub mod index;
pub mod models;
pub mod state;
pub mod storage;
pub mod ui;

pub use app::router;
pub use index::DeliveryIndex;
pub use state::AppState;
pub use storage::{load_deliveries, resolve_deliveries_path};
