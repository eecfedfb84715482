//! Expense log records
//!
//! An expense has an amount, a category from a closed set, a canonical
//! YYYY-MM-DD date and an optional description. Dates are re-serialized
//! after parsing, so non-canonical but readable input is normalized.

use chrono::NaiveDate;
use rusqlite::types::Value;
use serde::Serialize;

use crate::error::{ShoeboxError, ShoeboxResult, ValidationReason};
use crate::models::record::{FieldSpec, FieldUpdate, Record, RecordId};

/// Spending category
///
/// The set is closed; anything else is rejected at validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Transport,
    Entertainment,
    Other,
}

impl Category {
    /// All categories, in display order
    pub const ALL: [Category; 4] = [
        Category::Food,
        Category::Transport,
        Category::Entertainment,
        Category::Other,
    ];

    /// Parse a category name, case-insensitively
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "food" => Some(Category::Food),
            "transport" => Some(Category::Transport),
            "entertainment" => Some(Category::Entertainment),
            "other" => Some(Category::Other),
            _ => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Category::Food => "food",
            Category::Transport => "transport",
            Category::Entertainment => "entertainment",
            Category::Other => "other",
        };
        write!(f, "{}", name)
    }
}

/// A stored expense log entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Expense {
    /// Store-assigned identifier
    pub id: RecordId,
    /// Amount spent, sign unconstrained
    pub amount: f64,
    /// Spending category
    pub category: Category,
    /// Day of the expense, canonical YYYY-MM-DD
    pub date: String,
    /// What the money went to, if noted
    pub description: Option<String>,
}

/// Validated input for inserting or updating an expense
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseDraft {
    pub(crate) amount: f64,
    pub(crate) category: Category,
    pub(crate) date: String,
    pub(crate) description: Option<String>,
}

impl ExpenseDraft {
    /// Validate raw field values into a draft
    pub fn new(
        amount: f64,
        category: &str,
        date: &str,
        description: Option<&str>,
    ) -> ShoeboxResult<Self> {
        let category = Category::parse(category)
            .ok_or_else(|| ShoeboxError::invalid("category", ValidationReason::UnknownCategory))?;
        let date = canonical_date(date)?;
        let description = match description.map(str::trim) {
            None | Some("") => None,
            Some(d) => Some(d.to_string()),
        };
        Ok(Self {
            amount,
            category,
            date,
            description,
        })
    }
}

/// Partial change request for a stored expense
#[derive(Debug, Clone, Default)]
pub struct ExpensePatch {
    pub amount: Option<f64>,
    pub category: Option<String>,
    pub date: Option<String>,
    pub description: FieldUpdate<String>,
}

/// Loose decode target for one interchange row
#[derive(Debug, Clone, Default)]
pub struct ExpenseWire {
    pub(crate) amount: Option<String>,
    pub(crate) category: Option<String>,
    pub(crate) date: Option<String>,
    pub(crate) description: Option<String>,
}

/// Parse a date and re-serialize it canonically
///
/// Accepts anything chrono reads under %Y-%m-%d, unpadded months and days
/// included, and rewrites it zero-padded.
pub(crate) fn canonical_date(raw: &str) -> ShoeboxResult<String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map(|d| d.format("%Y-%m-%d").to_string())
        .map_err(|_| ShoeboxError::invalid("date", ValidationReason::InvalidDateFormat))
}

impl Record for Expense {
    type Draft = ExpenseDraft;
    type Patch = ExpensePatch;
    type Wire = ExpenseWire;

    const KIND: &'static str = "Expense";
    const TABLE: &'static str = "expenses";
    const CREATE_TABLE_SQL: &'static str = "CREATE TABLE IF NOT EXISTS expenses (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            amount REAL NOT NULL,
            category TEXT NOT NULL,
            date TEXT NOT NULL,
            description TEXT
        )";
    const INSERT_SQL: &'static str =
        "INSERT INTO expenses (amount, category, date, description) VALUES (?1, ?2, ?3, ?4)";
    const UPDATE_SQL: &'static str =
        "UPDATE expenses SET amount = ?1, category = ?2, date = ?3, description = ?4 WHERE id = ?5";
    const SELECT_SQL: &'static str = "SELECT id, amount, category, date, description FROM expenses";
    const DISPLAY_ORDER: &'static str = "date DESC, id DESC";
    const DUPLICATE_SQL: Option<&'static str> = None;
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec {
            name: "amount",
            aliases: &["amount", "сумма"],
            required: true,
        },
        FieldSpec {
            name: "category",
            aliases: &["category", "категория"],
            required: true,
        },
        FieldSpec {
            name: "date",
            aliases: &["date", "дата"],
            required: true,
        },
        FieldSpec {
            name: "description",
            aliases: &["description", "описание"],
            required: false,
        },
    ];

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        let raw: String = row.get(2)?;
        let category = Category::parse(&raw).ok_or_else(|| {
            rusqlite::Error::FromSqlConversionFailure(
                2,
                rusqlite::types::Type::Text,
                format!("unknown category '{}'", raw).into(),
            )
        })?;
        Ok(Self {
            id: RecordId(row.get(0)?),
            amount: row.get(1)?,
            category,
            date: row.get(3)?,
            description: row.get(4)?,
        })
    }

    fn insert_params(draft: &ExpenseDraft) -> Vec<Value> {
        vec![
            Value::from(draft.amount),
            Value::from(draft.category.to_string()),
            Value::from(draft.date.clone()),
            Value::from(draft.description.clone()),
        ]
    }

    fn merged_draft(current: &Self, patch: ExpensePatch) -> ShoeboxResult<ExpenseDraft> {
        let amount = patch.amount.unwrap_or(current.amount);
        let category = patch
            .category
            .unwrap_or_else(|| current.category.to_string());
        let date = patch.date.unwrap_or_else(|| current.date.clone());
        let description = patch.description.apply(current.description.clone());
        ExpenseDraft::new(amount, &category, &date, description.as_deref())
    }

    fn draft_from_wire(wire: ExpenseWire) -> Result<ExpenseDraft, String> {
        let raw_amount = wire.amount.ok_or("missing amount")?;
        let amount: f64 = raw_amount
            .trim()
            .parse()
            .map_err(|_| format!("unreadable amount '{}'", raw_amount))?;
        let category = wire.category.ok_or("missing category")?;
        let date = wire.date.ok_or("missing date")?;
        ExpenseDraft::new(amount, &category, &date, wire.description.as_deref())
            .map_err(|e| e.to_string())
    }

    fn set_wire_field(wire: &mut ExpenseWire, field: &'static str, raw: &str) {
        let raw = raw.trim();
        if raw.is_empty() {
            return;
        }
        match field {
            "amount" => wire.amount = Some(raw.to_string()),
            "category" => wire.category = Some(raw.to_string()),
            "date" => wire.date = Some(raw.to_string()),
            "description" => wire.description = Some(raw.to_string()),
            _ => {}
        }
    }

    fn field_values(&self) -> Vec<String> {
        vec![
            format!("{}", self.amount),
            self.category.to_string(),
            self.date.clone(),
            self.description.clone().unwrap_or_default(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse_case_insensitive() {
        assert_eq!(Category::parse("food"), Some(Category::Food));
        assert_eq!(Category::parse("Food"), Some(Category::Food));
        assert_eq!(Category::parse(" TRANSPORT "), Some(Category::Transport));
    }

    #[test]
    fn test_category_unknown() {
        assert_eq!(Category::parse("snacks"), None);
        assert_eq!(Category::parse(""), None);
    }

    #[test]
    fn test_category_display_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::parse(&category.to_string()), Some(category));
        }
    }

    #[test]
    fn test_unknown_category_rejected() {
        let err = ExpenseDraft::new(10.0, "snacks", "2024-01-15", None).unwrap_err();
        assert!(matches!(
            err,
            ShoeboxError::Validation {
                field: "category",
                reason: ValidationReason::UnknownCategory
            }
        ));
    }

    #[test]
    fn test_date_canonicalized() {
        let draft = ExpenseDraft::new(10.0, "food", "2024-2-5", None).unwrap();
        assert_eq!(draft.date, "2024-02-05");
    }

    #[test]
    fn test_impossible_date_rejected() {
        let err = ExpenseDraft::new(10.0, "food", "2024-02-30", None).unwrap_err();
        assert!(matches!(
            err,
            ShoeboxError::Validation {
                field: "date",
                reason: ValidationReason::InvalidDateFormat
            }
        ));
    }

    #[test]
    fn test_leap_day_accepted() {
        let draft = ExpenseDraft::new(10.0, "food", "2024-02-29", None).unwrap();
        assert_eq!(draft.date, "2024-02-29");
    }

    #[test]
    fn test_non_date_rejected() {
        for bad in ["yesterday", "05-02-2024", "2024/02/05", "2024-02-05x"] {
            assert!(
                ExpenseDraft::new(10.0, "food", bad, None).is_err(),
                "expected rejection for {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_blank_description_absent() {
        let draft = ExpenseDraft::new(10.0, "food", "2024-01-15", Some("  ")).unwrap();
        assert_eq!(draft.description, None);
    }

    #[test]
    fn test_negative_amount_allowed() {
        let draft = ExpenseDraft::new(-25.0, "other", "2024-01-15", Some("refund")).unwrap();
        assert_eq!(draft.amount, -25.0);
    }

    #[test]
    fn test_wire_missing_amount() {
        let mut wire = ExpenseWire::default();
        Expense::set_wire_field(&mut wire, "category", "food");
        Expense::set_wire_field(&mut wire, "date", "2024-01-15");
        assert_eq!(Expense::draft_from_wire(wire).unwrap_err(), "missing amount");
    }

    #[test]
    fn test_wire_unreadable_amount() {
        let mut wire = ExpenseWire::default();
        Expense::set_wire_field(&mut wire, "amount", "12,50");
        Expense::set_wire_field(&mut wire, "category", "food");
        Expense::set_wire_field(&mut wire, "date", "2024-01-15");
        let err = Expense::draft_from_wire(wire).unwrap_err();
        assert!(err.contains("unreadable amount"));
    }

    #[test]
    fn test_wire_row_promotion() {
        let mut wire = ExpenseWire::default();
        Expense::set_wire_field(&mut wire, "amount", "12.50");
        Expense::set_wire_field(&mut wire, "category", "Food");
        Expense::set_wire_field(&mut wire, "date", "2024-1-5");
        Expense::set_wire_field(&mut wire, "description", "lunch");
        let draft = Expense::draft_from_wire(wire).unwrap();
        assert_eq!(draft.amount, 12.5);
        assert_eq!(draft.category, Category::Food);
        assert_eq!(draft.date, "2024-01-05");
        assert_eq!(draft.description, Some("lunch".to_string()));
    }

    fn stored_expense() -> Expense {
        Expense {
            id: RecordId(1),
            amount: 12.5,
            category: Category::Food,
            date: "2024-01-15".to_string(),
            description: Some("lunch".to_string()),
        }
    }

    #[test]
    fn test_merged_draft_changes_category_only() {
        let patch = ExpensePatch {
            category: Some("transport".to_string()),
            ..Default::default()
        };
        let draft = Expense::merged_draft(&stored_expense(), patch).unwrap();
        assert_eq!(draft.category, Category::Transport);
        assert_eq!(draft.amount, 12.5);
        assert_eq!(draft.date, "2024-01-15");
        assert_eq!(draft.description, Some("lunch".to_string()));
    }

    #[test]
    fn test_merged_draft_clears_description() {
        let patch = ExpensePatch {
            description: FieldUpdate::Clear,
            ..Default::default()
        };
        let draft = Expense::merged_draft(&stored_expense(), patch).unwrap();
        assert_eq!(draft.description, None);
    }

    #[test]
    fn test_merged_draft_rejects_bad_date() {
        let patch = ExpensePatch {
            date: Some("2024-13-01".to_string()),
            ..Default::default()
        };
        let err = Expense::merged_draft(&stored_expense(), patch).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_field_values() {
        assert_eq!(
            stored_expense().field_values(),
            vec!["12.5", "food", "2024-01-15", "lunch"]
        );
    }
}
