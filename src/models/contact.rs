//! Contact book records
//!
//! A contact has a required name and phone and an optional validated email.
//! `ContactDraft` is the only way past validation; the store accepts
//! nothing else.

use rusqlite::types::Value;
use serde::Serialize;

use crate::error::{ShoeboxError, ShoeboxResult, ValidationReason};
use crate::models::record::{FieldSpec, FieldUpdate, Record, RecordId};

/// A stored contact book entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contact {
    /// Store-assigned identifier
    pub id: RecordId,
    /// Person's name
    pub name: String,
    /// Phone number, kept as entered
    pub phone: String,
    /// Email address, if one is on file
    pub email: Option<String>,
}

/// Validated input for inserting or updating a contact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactDraft {
    pub(crate) name: String,
    pub(crate) phone: String,
    pub(crate) email: Option<String>,
}

impl ContactDraft {
    /// Validate raw field values into a draft
    ///
    /// Name and phone are trimmed and must be non-empty. A blank email is
    /// treated as absent; a non-blank one must have a plausible shape.
    pub fn new(name: &str, phone: &str, email: Option<&str>) -> ShoeboxResult<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ShoeboxError::invalid("name", ValidationReason::Empty));
        }
        let phone = phone.trim();
        if phone.is_empty() {
            return Err(ShoeboxError::invalid("phone", ValidationReason::Empty));
        }
        let email = match email.map(str::trim) {
            None | Some("") => None,
            Some(raw) if is_valid_email(raw) => Some(raw.to_string()),
            Some(_) => {
                return Err(ShoeboxError::invalid(
                    "email",
                    ValidationReason::InvalidEmailFormat,
                ))
            }
        };
        Ok(Self {
            name: name.to_string(),
            phone: phone.to_string(),
            email,
        })
    }
}

/// Partial change request for a stored contact
///
/// `None` keeps the stored value. The email field is a `FieldUpdate` so
/// keeping and clearing stay distinct.
#[derive(Debug, Clone, Default)]
pub struct ContactPatch {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: FieldUpdate<String>,
}

/// Loose decode target for one interchange row
#[derive(Debug, Clone, Default)]
pub struct ContactWire {
    pub(crate) name: Option<String>,
    pub(crate) phone: Option<String>,
    pub(crate) email: Option<String>,
}

/// Shape check for email addresses: something before the `@`, a domain
/// without further `@`s, and a dot strictly inside the domain.
fn is_valid_email(raw: &str) -> bool {
    let Some((local, domain)) = raw.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

impl Record for Contact {
    type Draft = ContactDraft;
    type Patch = ContactPatch;
    type Wire = ContactWire;

    const KIND: &'static str = "Contact";
    const TABLE: &'static str = "contacts";
    const CREATE_TABLE_SQL: &'static str = "CREATE TABLE IF NOT EXISTS contacts (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            phone TEXT NOT NULL,
            email TEXT
        )";
    const INSERT_SQL: &'static str = "INSERT INTO contacts (name, phone, email) VALUES (?1, ?2, ?3)";
    const UPDATE_SQL: &'static str =
        "UPDATE contacts SET name = ?1, phone = ?2, email = ?3 WHERE id = ?4";
    const SELECT_SQL: &'static str = "SELECT id, name, phone, email FROM contacts";
    const DISPLAY_ORDER: &'static str = "name, id";
    const DUPLICATE_SQL: Option<&'static str> =
        Some("SELECT id FROM contacts WHERE name = ?1 AND phone = ?2");
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec {
            name: "name",
            aliases: &["name", "имя"],
            required: true,
        },
        FieldSpec {
            name: "phone",
            aliases: &["phone", "телефон"],
            required: true,
        },
        FieldSpec {
            name: "email",
            aliases: &["email"],
            required: false,
        },
    ];

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: RecordId(row.get(0)?),
            name: row.get(1)?,
            phone: row.get(2)?,
            email: row.get(3)?,
        })
    }

    fn insert_params(draft: &ContactDraft) -> Vec<Value> {
        vec![
            Value::from(draft.name.clone()),
            Value::from(draft.phone.clone()),
            Value::from(draft.email.clone()),
        ]
    }

    fn duplicate_params(draft: &ContactDraft) -> Vec<Value> {
        vec![
            Value::from(draft.name.clone()),
            Value::from(draft.phone.clone()),
        ]
    }

    fn merged_draft(current: &Self, patch: ContactPatch) -> ShoeboxResult<ContactDraft> {
        let name = patch.name.unwrap_or_else(|| current.name.clone());
        let phone = patch.phone.unwrap_or_else(|| current.phone.clone());
        let email = patch.email.apply(current.email.clone());
        ContactDraft::new(&name, &phone, email.as_deref())
    }

    fn draft_from_wire(wire: ContactWire) -> Result<ContactDraft, String> {
        let name = wire.name.ok_or("missing name")?;
        let phone = wire.phone.ok_or("missing phone")?;
        // Bulk rows with a bad email keep the row and drop the address
        let email = wire.email.filter(|e| is_valid_email(e));
        ContactDraft::new(&name, &phone, email.as_deref()).map_err(|e| e.to_string())
    }

    fn set_wire_field(wire: &mut ContactWire, field: &'static str, raw: &str) {
        let raw = raw.trim();
        if raw.is_empty() {
            return;
        }
        match field {
            "name" => wire.name = Some(raw.to_string()),
            "phone" => wire.phone = Some(raw.to_string()),
            "email" => wire.email = Some(raw.to_string()),
            _ => {}
        }
    }

    fn field_values(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.phone.clone(),
            self.email.clone().unwrap_or_default(),
        ]
    }
}
