//! Service Configuration Module
//!
//! Bind address, request limits and CORS origins, loaded from TOML.
//!
//! ## Loading Order
//!
//! 1. `WELLPROFILE_CONFIG` environment variable (path to TOML file)
//! 2. `wellprofile.toml` in the current working directory
//! 3. Built-in defaults
//!
//! `WELLPROFILE_ADDR` and the `--addr` CLI flag override `server.addr`.
//!
//! The loaded config is immutable. `main` wraps it in an `Arc` and hands it
//! to the router; there is no global instance.

pub mod defaults;
mod service_config;
pub mod validation;

pub use service_config::*;
