//! Entity module - plain data definitions for the payment ledger.
//! There is no persistence layer; these structs live only in memory.

pub mod payment;

pub use payment::{PaymentRecord, PaymentStatus, PaymentType};
