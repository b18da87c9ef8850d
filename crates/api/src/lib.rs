#![forbid(unsafe_code)]

pub mod config;
pub mod http;
pub mod repository;

pub use config::{ApiConfig, ConfigError, Endpoints};
pub use repository::{ApiError, Backend, InMemoryRepository};
