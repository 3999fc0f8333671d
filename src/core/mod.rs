//! Core business logic - framework-agnostic ledger operations and report
//! formatting. Nothing in here touches the console; the presentation layer
//! pulls from these modules and re-renders after each mutation.

pub mod ledger;
pub mod report;

pub use ledger::PaymentLedger;
