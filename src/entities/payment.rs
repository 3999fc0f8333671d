//! Payment record entity - one billable item tracked by the ledger.
//!
//! Each record has a description, a counterparty, a textual due date, an
//! amount, a settlement status, and a type (tax or bill). Records are
//! created pending, can only move pending -> paid, and are never deleted.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Settlement status of a payment record.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    /// Not yet settled; counts toward the pending total
    #[default]
    Pending,
    /// Settled; terminal state
    Paid,
}

impl PaymentStatus {
    /// Parses a filter token into a status, accepting English and
    /// Portuguese spellings. Returns `None` for unrecognized tokens.
    #[must_use]
    pub fn parse_token(token: &str) -> Option<Self> {
        match token.trim().to_lowercase().as_str() {
            "pending" | "pendente" => Some(Self::Pending),
            "paid" | "pago" => Some(Self::Paid),
            _ => None,
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Paid => write!(f, "paid"),
        }
    }
}

/// Type of a payment record.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentType {
    /// Government tax (IPTU, IPVA, ...)
    Tax,
    /// Everything else - utilities, services, generic bills
    #[default]
    Bill,
}

impl PaymentType {
    /// Classifies a free-text type hint.
    ///
    /// A hint counts as [`Self::Tax`] when it case-insensitively contains a
    /// tax-indicating token ("imposto" or "tax"); anything else, including
    /// an empty hint, is [`Self::Bill`].
    #[must_use]
    pub fn from_hint(hint: &str) -> Self {
        let hint = hint.to_lowercase();
        if hint.contains("imposto") || hint.contains("tax") {
            Self::Tax
        } else {
            Self::Bill
        }
    }

    /// Parses a filter token into a type, accepting English and Portuguese
    /// spellings. Returns `None` for unrecognized tokens.
    #[must_use]
    pub fn parse_token(token: &str) -> Option<Self> {
        match token.trim().to_lowercase().as_str() {
            "tax" | "imposto" => Some(Self::Tax),
            "bill" | "conta" => Some(Self::Bill),
            _ => None,
        }
    }
}

impl fmt::Display for PaymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tax => write!(f, "tax"),
            Self::Bill => write!(f, "bill"),
        }
    }
}

/// One billable item tracked by the ledger.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PaymentRecord {
    /// Unique identifier, assigned by the ledger (max existing id + 1)
    pub id: i64,
    /// Human-readable label (e.g., "IPTU 2023")
    pub description: String,
    /// Payee or counterparty name (e.g., "Prefeitura")
    pub entity: String,
    /// Due date as entered, day/month/year; not calendar-validated
    pub due_date: String,
    /// Non-negative amount in currency units
    pub amount: f64,
    /// Settlement status; moves pending -> paid only
    pub status: PaymentStatus,
    /// Tax or bill
    pub kind: PaymentType,
}

impl PaymentRecord {
    /// True while the record still counts toward the pending total.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.status == PaymentStatus::Pending
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_from_hint_recognizes_tax_tokens() {
        assert_eq!(PaymentType::from_hint("Imposto"), PaymentType::Tax);
        assert_eq!(PaymentType::from_hint("IMPOSTO municipal"), PaymentType::Tax);
        assert_eq!(PaymentType::from_hint("property tax"), PaymentType::Tax);
        assert_eq!(PaymentType::from_hint("Tax"), PaymentType::Tax);
    }

    #[test]
    fn test_from_hint_defaults_to_bill() {
        assert_eq!(PaymentType::from_hint("Conta"), PaymentType::Bill);
        assert_eq!(PaymentType::from_hint("electricity"), PaymentType::Bill);
        assert_eq!(PaymentType::from_hint(""), PaymentType::Bill);
    }

    #[test]
    fn test_parse_type_token() {
        assert_eq!(PaymentType::parse_token("tax"), Some(PaymentType::Tax));
        assert_eq!(PaymentType::parse_token(" Imposto "), Some(PaymentType::Tax));
        assert_eq!(PaymentType::parse_token("bill"), Some(PaymentType::Bill));
        assert_eq!(PaymentType::parse_token("CONTA"), Some(PaymentType::Bill));
        assert_eq!(PaymentType::parse_token("rent"), None);
    }

    #[test]
    fn test_parse_status_token() {
        assert_eq!(
            PaymentStatus::parse_token("pending"),
            Some(PaymentStatus::Pending)
        );
        assert_eq!(
            PaymentStatus::parse_token("Pendente"),
            Some(PaymentStatus::Pending)
        );
        assert_eq!(PaymentStatus::parse_token("paid"), Some(PaymentStatus::Paid));
        assert_eq!(PaymentStatus::parse_token("pago"), Some(PaymentStatus::Paid));
        assert_eq!(PaymentStatus::parse_token("late"), None);
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(PaymentStatus::Pending.to_string(), "pending");
        assert_eq!(PaymentStatus::Paid.to_string(), "paid");
        assert_eq!(PaymentType::Tax.to_string(), "tax");
        assert_eq!(PaymentType::Bill.to_string(), "bill");
    }

    #[test]
    fn test_enums_deserialize_lowercase() {
        #[derive(Deserialize)]
        struct Probe {
            status: PaymentStatus,
            kind: PaymentType,
        }

        let probe: Probe = toml::from_str("status = \"paid\"\nkind = \"tax\"").unwrap();
        assert_eq!(probe.status, PaymentStatus::Paid);
        assert_eq!(probe.kind, PaymentType::Tax);
    }
}
