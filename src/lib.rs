pub mod config;
pub mod error;
pub mod logger;
pub mod placeholders;
pub mod resize;

pub use config::IconConfig;
pub use error::IconError;
