//! # fulla-api
//!
//! Typed models and resource operations for the DigitalOcean v2 API:
//! account details, droplet listing/creation/deletion/reboot, paginated
//! image listing, and SSH key listing.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod models;

pub use client::DropletsClient;
pub use fulla_core::{Error, Result};
