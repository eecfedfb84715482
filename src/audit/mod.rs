//! Audit logging
//!
//! Records every create, update and delete with before/after snapshots in
//! an append-only log, one JSON object per line (JSONL).
//!
//! # Example
//!
//! ```rust,ignore
//! use shoebox::audit::{AuditEntry, AuditLogger, EntityType};
//!
//! let logger = AuditLogger::new(audit_log_path);
//! let entry = AuditEntry::create(
//!     EntityType::Contact,
//!     contact.id,
//!     Some(contact.name.clone()),
//!     &contact,
//! );
//! logger.log(&entry)?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
