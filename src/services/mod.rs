//! Service layer
//!
//! Operations that combine the store with the interchange codecs and
//! attach file-level context to their failures.

pub mod transfer;

pub use transfer::{ImportReport, TransferService};
