pub mod app;
pub mod catalog;
pub mod config;
pub mod day;
pub mod errors;
pub mod gate;
pub mod handlers;
pub mod models;
pub mod quiz;
pub mod sink;
pub mod state;
pub mod storage;
pub mod ui;

pub use app::router;
pub use state::AppState;
pub use storage::{load_gate, persist_gate};
