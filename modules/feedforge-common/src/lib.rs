pub mod config;
pub mod error;
pub mod types;

pub use config::GenConfig;
pub use error::FeedForgeError;
pub use types::*;
