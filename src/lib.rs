pub mod app;
pub mod calendar;
pub mod clock;
pub mod completions;
pub mod config;
pub mod dates;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod schedule;
pub mod state;
pub mod storage;
pub mod timer;
pub mod ui;

pub use app::router;
pub use config::AppConfig;
pub use state::AppState;
pub use storage::load_state;
