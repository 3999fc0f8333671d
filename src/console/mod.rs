//! Console layer - the interactive surface over the payment ledger.
//!
//! Owns the ledger and the current filter selection, dispatches typed
//! commands, and re-renders the board from the model after every mutation.
//! All reads and writes go through injected `BufRead`/`Write` handles so
//! sessions can be scripted in tests.

/// Input-collection dialogs (add payment, confirmations)
pub mod dialogs;

use crate::{
    core::{PaymentLedger, report},
    entities::{PaymentStatus, PaymentType},
    errors::{Error, Result},
};
use std::io::{BufRead, Write};
use tracing::debug;

/// Currently selected filter dimensions. Each is independent; `None`
/// passes everything on that dimension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Type dimension (tax/bill)
    pub kind: Option<PaymentType>,
    /// Status dimension (pending/paid)
    pub status: Option<PaymentStatus>,
}

/// Interactive console session over one ledger instance.
pub struct Console<R, W> {
    ledger: PaymentLedger,
    filters: FilterState,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console owning the given ledger and I/O handles.
    pub const fn new(ledger: PaymentLedger, input: R, output: W) -> Self {
        Self {
            ledger,
            filters: FilterState {
                kind: None,
                status: None,
            },
            input,
            output,
        }
    }

    /// Read-only access to the ledger, for callers inspecting the session.
    #[must_use]
    pub const fn ledger(&self) -> &PaymentLedger {
        &self.ledger
    }

    /// Runs the command loop until `quit` or end of input.
    ///
    /// Ledger errors are reported to the user and abort only the
    /// in-progress action; only I/O failures end the session early.
    ///
    /// # Errors
    /// Returns [`Error::Io`] when the console handles fail.
    pub fn run(&mut self) -> Result<()> {
        writeln!(
            self.output,
            "payboard - type 'help' for the command list"
        )?;
        self.render()?;

        loop {
            let Some(line) =
                dialogs::prompt_line(&mut self.input, &mut self.output, "payboard> ")?
            else {
                break;
            };
            if !self.dispatch(&line)? {
                break;
            }
        }
        Ok(())
    }

    /// Handles one command line. Returns `false` when the session should end.
    fn dispatch(&mut self, line: &str) -> Result<bool> {
        let mut parts = line.split_whitespace();
        match parts.next() {
            None => {}
            Some("list" | "ls") => self.render()?,
            Some("add") => self.add_payment()?,
            Some("pay") => match parts.next().map(str::parse::<i64>) {
                Some(Ok(id)) => self.pay_one(id)?,
                _ => writeln!(self.output, "Usage: pay <id>")?,
            },
            Some("pay-all" | "payall") => self.pay_all()?,
            Some("filter") => self.choose_filters()?,
            Some("help") => self.print_help()?,
            Some("quit" | "exit" | "q") => return Ok(false),
            Some(other) => {
                debug!("Unknown console command: {other}");
                writeln!(self.output, "Unknown command '{other}', try 'help'.")?;
            }
        }
        Ok(true)
    }

    /// Renders the board from the model through the current filters.
    fn render(&mut self) -> Result<()> {
        let board = report::render_board(
            self.ledger.filter(self.filters.kind, self.filters.status),
            self.ledger.total_pending(),
        );
        write!(self.output, "{board}")?;
        Ok(())
    }

    /// Runs the add dialog and feeds the collected command into the ledger.
    fn add_payment(&mut self) -> Result<()> {
        let Some(command) = dialogs::collect_add_payment(&mut self.input, &mut self.output)?
        else {
            return Ok(());
        };

        match self.ledger.add(
            &command.description,
            &command.entity,
            &command.due_date,
            command.amount,
            &command.type_hint,
        ) {
            Ok(record) => {
                writeln!(self.output, "Payment {} added.", record.id)?;
                self.render()?;
            }
            Err(e) => writeln!(self.output, "Could not add payment: {e}")?,
        }
        Ok(())
    }

    /// Confirms and settles a single payment.
    fn pay_one(&mut self, id: i64) -> Result<()> {
        let Some(record) = self.ledger.get(id) else {
            writeln!(self.output, "{}", Error::PaymentNotFound { id })?;
            return Ok(());
        };
        if !record.is_pending() {
            writeln!(self.output, "Payment {id} is already paid.")?;
            return Ok(());
        }

        let question = format!(
            "Pay {} for {}?",
            record.description,
            report::format_amount(record.amount)
        );
        if !dialogs::confirm(&mut self.input, &mut self.output, &question)? {
            writeln!(self.output, "Cancelled.")?;
            return Ok(());
        }

        match self.ledger.pay_one(id) {
            Ok(_) => {
                writeln!(self.output, "Payment completed.")?;
                self.render()?;
            }
            Err(e) => writeln!(self.output, "{e}")?,
        }
        Ok(())
    }

    /// Confirms the computed total and settles every pending payment.
    fn pay_all(&mut self) -> Result<()> {
        let total = self.ledger.total_pending();
        if total <= 0.0 {
            writeln!(self.output, "No pending payments!")?;
            return Ok(());
        }

        let question = format!(
            "Pay all pending items totaling {}?",
            report::format_amount(total)
        );
        if !dialogs::confirm(&mut self.input, &mut self.output, &question)? {
            writeln!(self.output, "Cancelled.")?;
            return Ok(());
        }

        let paid = self.ledger.pay_all_pending();
        writeln!(self.output, "{paid} payment(s) settled.")?;
        self.render()?;
        Ok(())
    }

    /// Prompts for both filter dimensions, keeping a dimension unchanged
    /// when the reply is unrecognized.
    fn choose_filters(&mut self) -> Result<()> {
        if let Some(token) =
            dialogs::prompt_line(&mut self.input, &mut self.output, "Type filter (all/tax/bill): ")?
        {
            match parse_kind_filter(&token) {
                Some(kind) => self.filters.kind = kind,
                None => writeln!(
                    self.output,
                    "Unrecognized type '{token}', keeping current filter."
                )?,
            }
        }

        if let Some(token) = dialogs::prompt_line(
            &mut self.input,
            &mut self.output,
            "Status filter (all/pending/paid): ",
        )? {
            match parse_status_filter(&token) {
                Some(status) => self.filters.status = status,
                None => writeln!(
                    self.output,
                    "Unrecognized status '{token}', keeping current filter."
                )?,
            }
        }

        self.render()?;
        Ok(())
    }

    fn print_help(&mut self) -> Result<()> {
        writeln!(self.output, "Commands:")?;
        writeln!(self.output, "  list           show the board")?;
        writeln!(self.output, "  add            add a payment (dialog)")?;
        writeln!(self.output, "  pay <id>       settle one payment")?;
        writeln!(self.output, "  pay-all        settle every pending payment")?;
        writeln!(self.output, "  filter         choose type/status filters")?;
        writeln!(self.output, "  quit           end the session")?;
        Ok(())
    }
}

/// Parses a type-filter reply. Outer `None` means the token was not
/// recognized; inner `None` means no filter on that dimension.
fn parse_kind_filter(token: &str) -> Option<Option<PaymentType>> {
    let token = token.trim();
    if token.is_empty()
        || token.eq_ignore_ascii_case("all")
        || token.eq_ignore_ascii_case("todos")
    {
        return Some(None);
    }
    PaymentType::parse_token(token).map(Some)
}

/// Parses a status-filter reply, with the same shape as
/// [`parse_kind_filter`].
fn parse_status_filter(token: &str) -> Option<Option<PaymentStatus>> {
    let token = token.trim();
    if token.is_empty()
        || token.eq_ignore_ascii_case("all")
        || token.eq_ignore_ascii_case("todos")
    {
        return Some(None);
    }
    PaymentStatus::parse_token(token).map(Some)
}
