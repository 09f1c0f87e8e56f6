pub mod app;
pub mod backend;
pub mod config;
pub mod defaults;
pub mod errors;
pub mod filters;
pub mod handlers;
pub mod local_store;
pub mod models;
pub mod remote_store;
pub mod session;
pub mod state;
pub mod stats;
pub mod ui;
pub mod validate;

pub use app::router;
pub use backend::Journal;
pub use config::Config;
pub use local_store::LocalStore;
pub use state::AppState;
