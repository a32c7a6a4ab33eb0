pub mod app;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod registry;
pub mod schedule;
pub mod state;
pub mod stats;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use registry::{Action, Registry};
pub use state::AppState;
