//! Shoebox - contact book and expense log for the terminal
//!
//! One validation, storage and interchange core shared by two small
//! record-keeping domains. Each domain owns a single-table SQLite store;
//! records enter it only through validating constructors, and leave or
//! arrive in bulk through CSV and JSON documents.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution for the stores and the audit log
//! - `error`: The error taxonomy shared by every layer
//! - `models`: Record kinds, their drafts, patches and field tables
//! - `store`: Generic single-table SQLite repository
//! - `interchange`: CSV and JSON codecs
//! - `services`: Bulk export/import over a store
//! - `audit`: Append-only JSONL log of every mutation
//! - `display`: Terminal table and detail rendering
//! - `cli`: Command handlers behind the clap surface
//!
//! # Example
//!
//! ```rust,ignore
//! use shoebox::models::{Contact, ContactDraft};
//! use shoebox::store::Table;
//!
//! let table: Table<Contact> = Table::open(&paths.contacts_db())?;
//! let draft = ContactDraft::new("Ann", "555-0101", None)?;
//! let id = table.insert(&draft)?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod interchange;
pub mod models;
pub mod services;
pub mod store;

pub use error::{ShoeboxError, ShoeboxResult};
