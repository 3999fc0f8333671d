//! Seed record loading from the TOML seed file.
//!
//! This module provides functionality to load the payment records that
//! populate the ledger at startup. When no seed file exists at the default
//! location, a built-in example set is used so a first run shows a working
//! board.

use crate::{
    entities::{PaymentRecord, PaymentStatus, PaymentType},
    errors::{Error, Result},
};
use serde::Deserialize;
use std::path::Path;
use tracing::info;

/// Configuration structure representing the entire seed file
#[derive(Debug, Deserialize)]
pub struct Config {
    /// List of payment seeds, in display order
    pub payments: Vec<PaymentSeed>,
}

/// Configuration for a single seeded payment record
#[derive(Debug, Deserialize, Clone)]
pub struct PaymentSeed {
    /// Human-readable label
    pub description: String,
    /// Payee or counterparty name
    pub entity: String,
    /// Due date text, day/month/year
    pub due_date: String,
    /// Non-negative amount
    pub amount: f64,
    /// Settlement status; omitted seeds start pending
    #[serde(default)]
    pub status: PaymentStatus,
    /// Tax or bill; omitted seeds are bills
    #[serde(default, rename = "type")]
    pub kind: PaymentType,
}

impl PaymentSeed {
    /// Materializes the seed as a ledger record with the given id.
    #[must_use]
    pub fn into_record(self, id: i64) -> PaymentRecord {
        PaymentRecord {
            id,
            description: self.description,
            entity: self.entity,
            due_date: self.due_date,
            amount: self.amount,
            status: self.status,
            kind: self.kind,
        }
    }
}

/// Loads seed configuration from a TOML file.
///
/// # Errors
/// Returns [`Error::Config`] if the file cannot be read, the TOML syntax is
/// invalid, or required fields are missing.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read seed file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse seed file: {e}"),
    })
}

/// The built-in example seed set used when no seed file exists.
#[must_use]
pub fn default_seeds() -> Vec<PaymentSeed> {
    vec![
        PaymentSeed {
            description: "IPTU 2023".to_string(),
            entity: "Prefeitura".to_string(),
            due_date: "15/03/2023".to_string(),
            amount: 1250.00,
            status: PaymentStatus::Pending,
            kind: PaymentType::Tax,
        },
        PaymentSeed {
            description: "Energia Elétrica".to_string(),
            entity: "Light".to_string(),
            due_date: "10/03/2023".to_string(),
            amount: 350.50,
            status: PaymentStatus::Paid,
            kind: PaymentType::Bill,
        },
    ]
}

/// Turns a seed list into ledger records with sequential ids from 1.
#[must_use]
pub fn build_records(seeds: Vec<PaymentSeed>) -> Vec<PaymentRecord> {
    seeds
        .into_iter()
        .zip(1..)
        .map(|(seed, id)| seed.into_record(id))
        .collect()
}

/// Loads the startup records, honoring the resolved seed path.
///
/// An explicitly configured path must load; a missing file at the default
/// path falls back to the built-in example set.
///
/// # Errors
/// Returns [`Error::Config`] when the configured file cannot be loaded, or
/// when a file present at the default path is unreadable or malformed.
pub fn load_initial_records<P: AsRef<Path>>(path: P, explicit: bool) -> Result<Vec<PaymentRecord>> {
    let path = path.as_ref();
    if !explicit && !path.exists() {
        info!("No seed file at {}, using built-in seeds", path.display());
        return Ok(build_records(default_seeds()));
    }

    let config = load_config(path)?;
    info!(
        "Loaded {} seed record(s) from {}",
        config.payments.len(),
        path.display()
    );
    Ok(build_records(config.payments))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;

    #[test]
    fn test_parse_seed_config() {
        let toml_str = r#"
            [[payments]]
            description = "IPTU 2023"
            entity = "Prefeitura"
            due_date = "15/03/2023"
            amount = 1250.00
            type = "tax"

            [[payments]]
            description = "Energia Elétrica"
            entity = "Light"
            due_date = "10/03/2023"
            amount = 350.50
            status = "paid"
            type = "bill"
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.payments.len(), 2);
        assert_eq!(config.payments[0].description, "IPTU 2023");
        assert_eq!(config.payments[0].amount, 1250.0);
        // Omitted status defaults to pending
        assert_eq!(config.payments[0].status, PaymentStatus::Pending);
        assert_eq!(config.payments[0].kind, PaymentType::Tax);

        assert_eq!(config.payments[1].status, PaymentStatus::Paid);
        assert_eq!(config.payments[1].kind, PaymentType::Bill);
    }

    #[test]
    fn test_omitted_type_defaults_to_bill() {
        let toml_str = r#"
            [[payments]]
            description = "Internet"
            entity = "Provider"
            due_date = "01/05/2023"
            amount = 99.9
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.payments[0].kind, PaymentType::Bill);
        assert_eq!(config.payments[0].status, PaymentStatus::Pending);
    }

    #[test]
    fn test_build_records_assigns_sequential_ids() {
        let records = build_records(default_seeds());

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, 1);
        assert_eq!(records[0].kind, PaymentType::Tax);
        assert_eq!(records[1].id, 2);
        assert_eq!(records[1].status, PaymentStatus::Paid);
    }

    #[test]
    fn test_load_config_missing_file_is_config_error() {
        let result = load_config("definitely-not-here.toml");
        assert!(matches!(result.unwrap_err(), Error::Config { message: _ }));
    }

    #[test]
    fn test_load_initial_records_falls_back_without_file() {
        let records = load_initial_records("definitely-not-here.toml", false).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].description, "IPTU 2023");
    }

    #[test]
    fn test_load_initial_records_explicit_path_must_exist() {
        let result = load_initial_records("definitely-not-here.toml", true);
        assert!(matches!(result.unwrap_err(), Error::Config { message: _ }));
    }
}
