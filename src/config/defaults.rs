//! Service default constants.
//!
//! Grouped by subsystem. Every value here can be overridden from the
//! service TOML file unless noted otherwise.

// ============================================================================
// Config Loading
// ============================================================================

/// Environment variable naming an explicit config file path.
pub const CONFIG_PATH_ENV: &str = "WELLPROFILE_CONFIG";

/// Config file looked up in the working directory when no path is given.
pub const LOCAL_CONFIG_FILE: &str = "wellprofile.toml";

/// Environment variable overriding `server.addr`.
pub const SERVER_ADDR_ENV: &str = "WELLPROFILE_ADDR";

// ============================================================================
// Server
// ============================================================================

pub const SERVER_ADDR: &str = "0.0.0.0:8000";

/// Maximum accepted request body (bytes).
///
/// 2 MiB holds roughly 20 000 survey stations.
pub const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Service name reported by `GET /`.
pub const SERVICE_NAME: &str = "H2Oil Complete - Well Profile API";

// ============================================================================
// CORS
// ============================================================================

/// Frontend dev servers allowed by default (React, Expo, Vite).
pub const CORS_ORIGINS: &[&str] = &[
    "http://localhost:3000",
    "http://localhost:8081",
    "http://localhost:5173",
];
