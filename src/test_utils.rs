//! Shared test utilities for payboard.
//!
//! This module provides common helper functions for building seeded ledgers
//! and adding test records with sensible defaults.

#![allow(clippy::unwrap_used)]

use crate::{
    config::seeds,
    core::PaymentLedger,
    entities::PaymentRecord,
};

/// Creates a ledger holding the built-in example seed set:
/// a pending tax (id 1, 1250.00) and a paid bill (id 2, 350.50).
/// This is the standard starting state for ledger and console tests.
pub fn seeded_ledger() -> PaymentLedger {
    PaymentLedger::with_records(seeds::build_records(seeds::default_seeds()))
}

/// Adds a payment with sensible defaults and returns the new record.
///
/// # Defaults
/// * `entity`: `"Test Entity"`
/// * `due_date`: `"01/01/2024"`
/// * `amount`: 100.0
/// * `type_hint`: empty (classifies as a bill)
pub fn add_test_payment(ledger: &mut PaymentLedger, description: &str) -> PaymentRecord {
    ledger
        .add(description, "Test Entity", "01/01/2024", 100.0, "")
        .unwrap()
}

/// Adds a payment with custom parameters.
/// Use this when a test needs a specific amount or type.
pub fn add_custom_payment(
    ledger: &mut PaymentLedger,
    description: &str,
    entity: &str,
    due_date: &str,
    amount: f64,
    type_hint: &str,
) -> PaymentRecord {
    ledger
        .add(description, entity, due_date, amount, type_hint)
        .unwrap()
}
