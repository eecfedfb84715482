//! The record abstraction shared by contacts and expenses
//!
//! The store, the interchange codecs and the transfer service are written
//! once against this trait. Everything kind-specific lives behind it: the
//! SQL for the kind's single table, the interchange field table, and the
//! conversions between rows, drafts and wire values.

use serde::{Deserialize, Serialize};

use crate::error::ShoeboxResult;

/// Identifier assigned by the store when a record is first persisted
///
/// Ids are unique per table, monotonically increasing, and never reused
/// even after a delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub i64);

impl RecordId {
    pub fn as_i64(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Change request for an optional field
///
/// Distinguishes "leave it alone" from "remove the stored value", which a
/// plain Option cannot express.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldUpdate<T> {
    /// Keep the stored value
    #[default]
    Keep,
    /// Replace the stored value
    Set(T),
    /// Remove the stored value
    Clear,
}

impl<T> FieldUpdate<T> {
    /// Resolve this update against the currently stored value
    pub fn apply(self, current: Option<T>) -> Option<T> {
        match self {
            FieldUpdate::Keep => current,
            FieldUpdate::Set(value) => Some(value),
            FieldUpdate::Clear => None,
        }
    }
}

/// How one interchange column is named and matched
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Canonical column name, used when encoding
    pub name: &'static str,
    /// Accepted header spellings when decoding, lowercase, canonical name
    /// included
    pub aliases: &'static [&'static str],
    /// Whether a row without this field is rejected
    pub required: bool,
}

impl FieldSpec {
    /// Case-insensitive match of a header against this field's aliases
    pub fn matches(&self, header: &str) -> bool {
        let header = header.trim().to_lowercase();
        self.aliases.iter().any(|a| *a == header)
    }
}

/// A persistable record kind
pub trait Record: Clone + Serialize + Sized {
    /// Validated input for insert and update, obtainable only through
    /// validation
    type Draft: Clone;
    /// Partial change request merged over a stored record
    type Patch;
    /// Loosely-typed decode target for one interchange row
    type Wire: Default;

    /// Human-facing kind name, used in errors and audit entries
    const KIND: &'static str;
    /// Name of the kind's single table
    const TABLE: &'static str;
    /// Idempotent schema statement for the table
    const CREATE_TABLE_SQL: &'static str;
    /// Insert statement binding the draft fields in FIELDS order
    const INSERT_SQL: &'static str;
    /// Update statement binding the draft fields in FIELDS order, then the id
    const UPDATE_SQL: &'static str;
    /// Select of id plus the draft fields, without an ORDER BY
    const SELECT_SQL: &'static str;
    /// ORDER BY fragment for human-facing listings
    const DISPLAY_ORDER: &'static str;
    /// Natural-key lookup returning the id of a stored twin, or None for
    /// kinds that allow duplicates
    const DUPLICATE_SQL: Option<&'static str>;
    /// Interchange columns in encoding order; the id column is implicit
    const FIELDS: &'static [FieldSpec];

    fn id(&self) -> RecordId;

    /// Bind a database row, selected by SELECT_SQL, back into a record
    fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self>;

    /// Parameter values for INSERT_SQL, in statement order
    fn insert_params(draft: &Self::Draft) -> Vec<rusqlite::types::Value>;

    /// Parameter values for DUPLICATE_SQL
    fn duplicate_params(_draft: &Self::Draft) -> Vec<rusqlite::types::Value> {
        Vec::new()
    }

    /// Merge a patch over the stored record and re-validate the result
    fn merged_draft(current: &Self, patch: Self::Patch) -> ShoeboxResult<Self::Draft>;

    /// Promote a decoded row to a draft, lenient on optional fields
    ///
    /// A missing or invalid required field rejects the row with a reason;
    /// an invalid optional field is downgraded to absent.
    fn draft_from_wire(wire: Self::Wire) -> Result<Self::Draft, String>;

    /// Store one raw column value into the wire row
    ///
    /// Blank values are treated as absent. Field names not in FIELDS are
    /// ignored.
    fn set_wire_field(wire: &mut Self::Wire, field: &'static str, raw: &str);

    /// Column values in FIELDS order, for delimited encoding
    fn field_values(&self) -> Vec<String>;
}
