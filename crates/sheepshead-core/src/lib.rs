pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod model;

pub use error::GameError;

pub struct AppInfo;

impl AppInfo {
    pub const fn name() -> &'static str {
        "sheepshead-core"
    }

    pub const fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }
}
