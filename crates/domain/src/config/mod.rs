pub mod api;
pub mod errors;
pub mod logging;
pub mod root;

pub use api::ApiConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
