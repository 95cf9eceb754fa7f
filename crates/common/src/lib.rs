//! Shared configuration and error handling for the TopTop admin gateway
//!
//! - Configuration management following 12-factor principles
//! - The gateway-wide error type with HTTP status mapping

pub mod config;
pub mod error;

pub use config::Config;
pub use error::{Error, Result};
