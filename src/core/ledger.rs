//! Ledger business logic - Handles all payment-list operations.
//!
//! This module provides the in-memory ledger of payment records together
//! with the operations the console drives: adding records, settling them
//! one at a time or in bulk, computing the pending total, and filtering by
//! type and status. The module validates every add to prevent invalid
//! records such as empty labels or non-finite amounts. All operations are
//! synchronous transformations of the owned record list and return Result
//! types for proper error handling throughout the system.

use crate::{
    entities::{PaymentRecord, PaymentStatus, PaymentType},
    errors::{Error, Result},
};
use tracing::{debug, info};

/// Ordered, in-memory collection of payment records.
///
/// Insertion order is display order. Records are never removed; the only
/// mutations are `add` (append) and the pay operations (pending -> paid).
#[derive(Debug, Default, Clone)]
pub struct PaymentLedger {
    records: Vec<PaymentRecord>,
}

impl PaymentLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Creates a ledger pre-populated with already-constructed records.
    ///
    /// Used by the seeding path; the caller is responsible for id
    /// uniqueness of the seeds (the config loader assigns sequential ids).
    #[must_use]
    pub fn with_records(records: Vec<PaymentRecord>) -> Self {
        Self { records }
    }

    /// Adds a new payment record and returns a copy of it.
    ///
    /// The record starts pending and receives `max existing id + 1` (1 for
    /// an empty ledger). The type hint is classified per
    /// [`PaymentType::from_hint`].
    ///
    /// # Arguments
    /// * `description` - Human-readable label
    /// * `entity` - Payee or counterparty name
    /// * `due_date` - Due date text, day/month/year; stored as entered
    /// * `amount` - Non-negative amount
    /// * `type_hint` - Free text classified into tax or bill
    ///
    /// # Errors
    /// Returns [`Error::MissingField`] if description, entity, or due date
    /// is empty after trimming, and [`Error::InvalidAmount`] if the amount
    /// is negative, NaN, or infinite.
    pub fn add(
        &mut self,
        description: &str,
        entity: &str,
        due_date: &str,
        amount: f64,
        type_hint: &str,
    ) -> Result<PaymentRecord> {
        if description.trim().is_empty() {
            return Err(Error::MissingField {
                field: "description",
            });
        }
        if entity.trim().is_empty() {
            return Err(Error::MissingField { field: "entity" });
        }
        if due_date.trim().is_empty() {
            return Err(Error::MissingField { field: "due date" });
        }
        if !amount.is_finite() || amount < 0.0 {
            return Err(Error::InvalidAmount { amount });
        }

        let record = PaymentRecord {
            id: self.next_id(),
            description: description.trim().to_string(),
            entity: entity.trim().to_string(),
            due_date: due_date.trim().to_string(),
            amount,
            status: PaymentStatus::Pending,
            kind: PaymentType::from_hint(type_hint),
        };

        info!(
            "Added payment {} ({}, {}) due {} for {:.2}",
            record.id, record.description, record.kind, record.due_date, record.amount
        );

        self.records.push(record.clone());
        Ok(record)
    }

    /// Settles a single record by id.
    ///
    /// Returns `Ok(true)` when the record moved pending -> paid and
    /// `Ok(false)` when it was already paid (the operation is idempotent).
    ///
    /// # Errors
    /// Returns [`Error::PaymentNotFound`] if no record carries `id`; the
    /// collection is left unchanged.
    pub fn pay_one(&mut self, id: i64) -> Result<bool> {
        let record = self
            .records
            .iter_mut()
            .find(|record| record.id == id)
            .ok_or(Error::PaymentNotFound { id })?;

        if record.status == PaymentStatus::Paid {
            debug!("Payment {id} already paid, nothing to do");
            return Ok(false);
        }

        record.status = PaymentStatus::Paid;
        info!("Paid payment {} ({:.2})", id, record.amount);
        Ok(true)
    }

    /// Settles every pending record and returns how many changed.
    ///
    /// Zero is a valid outcome - nothing was pending.
    pub fn pay_all_pending(&mut self) -> usize {
        let mut paid = 0;
        for record in &mut self.records {
            if record.status == PaymentStatus::Pending {
                record.status = PaymentStatus::Paid;
                paid += 1;
            }
        }
        info!("Paid {paid} pending payment(s)");
        paid
    }

    /// Sum of amounts over pending records; 0.0 when none are pending.
    #[must_use]
    pub fn total_pending(&self) -> f64 {
        self.records
            .iter()
            .filter(|record| record.is_pending())
            .map(|record| record.amount)
            .sum()
    }

    /// Lazily yields records matching both present filters, in insertion
    /// order. An absent dimension passes everything; the collection is not
    /// mutated, and the iterator can be recreated at will.
    pub fn filter(
        &self,
        kind: Option<PaymentType>,
        status: Option<PaymentStatus>,
    ) -> impl Iterator<Item = &PaymentRecord> {
        self.records
            .iter()
            .filter(move |record| kind.is_none_or(|kind| record.kind == kind))
            .filter(move |record| status.is_none_or(|status| record.status == status))
    }

    /// All records in insertion order.
    #[must_use]
    pub fn records(&self) -> &[PaymentRecord] {
        &self.records
    }

    /// Looks up a single record by id.
    #[must_use]
    pub fn get(&self, id: i64) -> Option<&PaymentRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Number of records in the ledger.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the ledger holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn next_id(&self) -> i64 {
        self.records
            .iter()
            .map(|record| record.id)
            .max()
            .unwrap_or(0)
            + 1
    }
}
