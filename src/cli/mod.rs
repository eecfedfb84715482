//! CLI command handlers
//!
//! Bridges clap argument parsing with the store, the transfer service and
//! the audit log. Each domain opens its own store; every mutation that
//! succeeds is logged before the handler returns.

pub mod contact;
pub mod expense;

pub use contact::{handle_contact_command, ContactCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
