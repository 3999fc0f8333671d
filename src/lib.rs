//! `payboard` - a terminal payments board
//!
//! This crate tracks a small in-memory ledger of billing items (taxes and
//! bills), letting a user add items, settle them one at a time or in bulk,
//! and view the list through independent type/status filters. All state is
//! volatile: the ledger lives for one console session and is redrawn after
//! every mutation.

// Deny the most critical lints that could lead to bugs or security issues
#![deny(
    unsafe_code,
    unsafe_op_in_unsafe_fn,
    unreachable_code,
    unreachable_patterns,
    unused_must_use,
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links
)]
// Warn on things that should be fixed but aren't necessarily bugs
#![warn(
    missing_docs,
    clippy::all,
    clippy::pedantic,
    clippy::float_cmp,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::semicolon_if_nothing_returned,
    clippy::wildcard_imports,
    future_incompatible,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions // Common pattern in Rust
)]

/// Seed configuration loading (TOML file + environment)
pub mod config;
/// Interactive console - command loop, dialogs, and filter controls
pub mod console;
/// Core business logic - ledger operations and report formatting
pub mod core;
/// Payment record data definitions
pub mod entities;
/// Unified error types and result handling
pub mod errors;

#[cfg(test)]
pub mod test_utils;
