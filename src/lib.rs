pub mod app;
pub mod clock;
pub mod errors;
pub mod format;
pub mod handlers;
pub mod ledger;
pub mod models;
pub mod registry;
pub mod session;
pub mod state;
pub mod stats;
pub mod store;
pub mod tracker;
pub mod ui;

pub use app::router;
pub use state::AppState;
pub use store::{resolve_data_path, FileStore};
pub use tracker::Tracker;
