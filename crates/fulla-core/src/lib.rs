//! # fulla-core
//!
//! Foundation crate for the fulla DigitalOcean client.
//!
//! ## Modules
//!
//! - [`error`] - Error taxonomy and provider error-envelope mapping
//! - [`config`] - Per-user settings file with the bearer token
//! - [`client`] - HTTP transport (GET/POST/DELETE with bearer auth)

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod config;
pub mod error;

// Re-export commonly used types
pub use client::{ApiClient, ApiClientBuilder};
pub use config::Settings;
pub use error::{Error, Result};
