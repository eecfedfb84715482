//! Core data models
//!
//! The two record kinds, the validated draft types that guard the store,
//! and the `Record` trait the generic layers are built against.

pub mod contact;
pub mod expense;
pub mod record;

pub use contact::{Contact, ContactDraft, ContactPatch, ContactWire};
pub use expense::{Category, Expense, ExpenseDraft, ExpensePatch, ExpenseWire};
pub use record::{FieldSpec, FieldUpdate, Record, RecordId};
