//! Input-collection dialogs.
//!
//! Line-oriented prompts that return fully-formed command objects (or an
//! explicit cancellation) for the console to feed into the ledger. The
//! dialogs never mutate the ledger themselves; validation beyond basic
//! coercion is left to the model.

use crate::errors::Result;
use chrono::Local;
use std::io::{BufRead, Write};

/// A fully-formed add command collected from the user.
#[derive(Debug, Clone, PartialEq)]
pub struct AddPayment {
    /// Human-readable label
    pub description: String,
    /// Payee or counterparty name
    pub entity: String,
    /// Due date text, day/month/year
    pub due_date: String,
    /// Amount as parsed from the reply
    pub amount: f64,
    /// Free-text type hint, classified by the ledger
    pub type_hint: String,
}

/// Prints a prompt and reads one trimmed reply line.
///
/// Returns `None` on end of input.
///
/// # Errors
/// Returns [`crate::errors::Error::Io`] if the prompt cannot be written or
/// the reply cannot be read.
pub fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> Result<Option<String>> {
    write!(output, "{label}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Asks a yes/no question. Only an explicit yes (`y`, `yes`, `s`, `sim`)
/// confirms; anything else, including end of input, declines.
///
/// # Errors
/// Propagates I/O failures from the underlying prompt.
pub fn confirm<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
) -> Result<bool> {
    let Some(reply) = prompt_line(input, output, &format!("{question} [y/N]: "))? else {
        return Ok(false);
    };
    Ok(matches!(
        reply.to_lowercase().as_str(),
        "y" | "yes" | "s" | "sim"
    ))
}

/// Runs the add-payment dialog.
///
/// Prompts for each field in turn. An empty reply to description or entity
/// cancels the dialog, as does an unparsable amount; a blank due date takes
/// today's date; a blank type hint classifies as a bill. Returns `None`
/// when cancelled, after telling the user.
///
/// # Errors
/// Propagates I/O failures from the underlying prompts.
pub fn collect_add_payment<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<Option<AddPayment>> {
    let Some(description) = prompt_line(input, output, "Description: ")? else {
        return cancelled(output);
    };
    if description.is_empty() {
        return cancelled(output);
    }

    let Some(entity) = prompt_line(input, output, "Entity: ")? else {
        return cancelled(output);
    };
    if entity.is_empty() {
        return cancelled(output);
    }

    let today = Local::now().format("%d/%m/%Y").to_string();
    let due_date = match prompt_line(
        input,
        output,
        &format!("Due date (DD/MM/YYYY) [{today}]: "),
    )? {
        Some(reply) if !reply.is_empty() => reply,
        Some(_) => today,
        None => return cancelled(output),
    };

    let Some(amount_text) = prompt_line(input, output, "Amount: ")? else {
        return cancelled(output);
    };
    let Ok(amount) = amount_text.parse::<f64>() else {
        writeln!(output, "'{amount_text}' is not a number.")?;
        return cancelled(output);
    };

    let Some(type_hint) = prompt_line(input, output, "Type (Imposto/Conta): ")? else {
        return cancelled(output);
    };

    Ok(Some(AddPayment {
        description,
        entity,
        due_date,
        amount,
        type_hint,
    }))
}

fn cancelled<W: Write>(output: &mut W) -> Result<Option<AddPayment>> {
    writeln!(output, "Cancelled.")?;
    Ok(None)
}
