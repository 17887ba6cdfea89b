mod app;
mod panels;
mod state;
pub mod services;

pub use app::PhotogenicApp;
pub use state::{AppState, UiAction};
