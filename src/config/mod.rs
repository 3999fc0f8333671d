//! Configuration management for the payboard console.
//!
//! The only configurable input is the seed file: a TOML list of payment
//! records present in the ledger at startup. Its location comes from the
//! `PAYBOARD_CONFIG` environment variable, falling back to `payments.toml`
//! in the working directory.

/// Seed record loading from the TOML seed file
pub mod seeds;

use std::path::PathBuf;
use tracing::debug;

/// Environment variable naming the seed file to load.
pub const CONFIG_PATH_VAR: &str = "PAYBOARD_CONFIG";

/// Seed file location used when the environment does not name one.
pub const DEFAULT_CONFIG_PATH: &str = "payments.toml";

/// Resolves the seed file path from the environment.
///
/// Returns the path and whether it was explicitly configured. An explicit
/// path that fails to load is a hard error; the default path is allowed to
/// be absent (the built-in seed set is used instead).
#[must_use]
pub fn resolve_seed_path() -> (PathBuf, bool) {
    match std::env::var(CONFIG_PATH_VAR) {
        Ok(path) if !path.trim().is_empty() => {
            debug!("Using seed file from {CONFIG_PATH_VAR}: {path}");
            (PathBuf::from(path), true)
        }
        _ => (PathBuf::from(DEFAULT_CONFIG_PATH), false),
    }
}
