pub mod config;
pub mod error;
pub mod types;

pub use config::{GddConfig, ServiceConfig};
pub use error::*;
pub use types::*;
