//! Display formatting for terminal output
//!
//! Formats records as tables for listings and as labeled blocks for
//! single-record views.

pub mod contact;
pub mod expense;
pub mod report;

pub use contact::{format_contact_details, format_contact_list};
pub use expense::{format_expense_details, format_expense_list};
pub use report::format_import_report;
