pub mod app;
pub mod context;
pub mod vm;
pub mod views;

pub use app::{App, ScreenController};
pub use context::{AppContext, UiApp, build_app_context};
