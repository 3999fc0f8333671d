//! Board rendering business logic.
//!
//! Pure formatting helpers turning ledger state into display strings. The
//! console layer decides *when* to redraw; everything here is side-effect
//! free and unit-testable.

use crate::entities::PaymentRecord;
use std::fmt::Write;

/// Formats an amount for display, e.g. `R$ 1250.00`.
///
/// Display formatting only - no locale-aware grouping or rounding
/// guarantees beyond two fixed decimals.
#[must_use]
pub fn format_amount(amount: f64) -> String {
    format!("R$ {amount:.2}")
}

/// Formats the column header matching [`format_record_row`].
#[must_use]
pub fn format_header_row() -> String {
    format!(
        "{:>3}  {:<24} {:<16} {:<12} {:>12} {:<8} {}",
        "ID", "DESCRIPTION", "ENTITY", "DUE", "AMOUNT", "STATUS", "TYPE"
    )
}

/// Formats one record as a fixed-width board row.
#[must_use]
pub fn format_record_row(record: &PaymentRecord) -> String {
    format!(
        "{:>3}  {:<24} {:<16} {:<12} {:>12} {:<8} {}",
        record.id,
        record.description,
        record.entity,
        record.due_date,
        format_amount(record.amount),
        record.status.to_string(),
        record.kind
    )
}

/// Renders the full board: header, one row per (filtered) record, and the
/// pending total across the whole ledger.
///
/// `total_pending` is passed in by the caller so the board always shows the
/// ledger-wide total, not the total of the filtered subsequence.
#[must_use]
pub fn render_board<'a, I>(records: I, total_pending: f64) -> String
where
    I: Iterator<Item = &'a PaymentRecord>,
{
    let mut board = String::new();
    let _ = writeln!(board, "{}", format_header_row());

    let mut shown = 0;
    for record in records {
        let _ = writeln!(board, "{}", format_record_row(record));
        shown += 1;
    }

    if shown == 0 {
        let _ = writeln!(board, "  (no payments match the current filters)");
    }

    let _ = writeln!(board, "Total pending: {}", format_amount(total_pending));
    board
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::entities::{PaymentStatus, PaymentType};
    use crate::test_utils::seeded_ledger;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(1250.0), "R$ 1250.00");
        assert_eq!(format_amount(350.5), "R$ 350.50");
        assert_eq!(format_amount(0.0), "R$ 0.00");
    }

    #[test]
    fn test_format_record_row_columns() {
        let record = PaymentRecord {
            id: 1,
            description: "IPTU 2023".to_string(),
            entity: "Prefeitura".to_string(),
            due_date: "15/03/2023".to_string(),
            amount: 1250.0,
            status: PaymentStatus::Pending,
            kind: PaymentType::Tax,
        };

        let row = format_record_row(&record);
        assert_eq!(
            row,
            "  1  IPTU 2023                Prefeitura       15/03/2023     R$ 1250.00 pending  tax"
        );
    }

    #[test]
    fn test_render_board_lists_records_and_total() {
        let ledger = seeded_ledger();

        let board = render_board(ledger.filter(None, None), ledger.total_pending());

        assert!(board.contains("IPTU 2023"));
        assert!(board.contains("Energia Elétrica"));
        assert!(board.contains("Total pending: R$ 1250.00"));
        assert!(!board.contains("no payments match"));
    }

    #[test]
    fn test_render_board_empty_selection_shows_placeholder() {
        let ledger = seeded_ledger();

        // Nothing in the seed set is a paid tax
        let board = render_board(
            ledger.filter(Some(PaymentType::Tax), Some(PaymentStatus::Paid)),
            ledger.total_pending(),
        );

        assert!(board.contains("no payments match"));
        assert!(board.contains("Total pending: R$ 1250.00"));
    }

    #[test]
    fn test_render_board_total_ignores_filters() {
        let ledger = seeded_ledger();

        // Only the paid bill is shown, but the total is still ledger-wide
        let board = render_board(
            ledger.filter(None, Some(PaymentStatus::Paid)),
            ledger.total_pending(),
        );

        assert!(board.contains("Energia Elétrica"));
        assert!(!board.contains("IPTU 2023"));
        assert!(board.contains("Total pending: R$ 1250.00"));
    }
}
