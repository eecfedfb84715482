//! SQLite-backed record storage
//!
//! One database file per record kind, one table per file. The schema is
//! created idempotently on open, so opening an existing store never drops
//! or rewrites data.

pub mod table;

pub use table::{ListOrder, Table};
