//! Expense CLI commands

use std::path::PathBuf;

use chrono::Local;
use clap::Subcommand;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::ShoeboxPaths;
use crate::display::{format_expense_details, format_expense_list, format_import_report};
use crate::error::{ShoeboxError, ShoeboxResult, ValidationReason};
use crate::interchange::Format;
use crate::models::{Category, Expense, ExpenseDraft, ExpensePatch, FieldUpdate, RecordId};
use crate::services::TransferService;
use crate::store::{ListOrder, Table};

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// Amount spent
        #[arg(allow_negative_numbers = true)]
        amount: f64,
        /// Spending category (food, transport, entertainment, other)
        category: String,
        /// Day of the expense (YYYY-MM-DD), today when omitted
        #[arg(short, long)]
        date: Option<String>,
        /// Free-form note
        #[arg(long)]
        description: Option<String>,
    },
    /// Show one expense
    Show {
        /// Expense id
        id: i64,
    },
    /// Change stored fields of an expense
    Update {
        /// Expense id
        id: i64,
        /// New amount
        #[arg(short, long, allow_negative_numbers = true)]
        amount: Option<f64>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
        /// New date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
        /// New note
        #[arg(long)]
        description: Option<String>,
        /// Remove the stored note
        #[arg(long, conflicts_with = "description")]
        clear_description: bool,
    },
    /// Delete an expense
    Delete {
        /// Expense id
        id: i64,
    },
    /// List expenses, newest first
    List {
        /// Only expenses on this date (YYYY-MM-DD)
        #[arg(long, conflicts_with = "category")]
        date: Option<String>,
        /// Only expenses of this category
        #[arg(long)]
        category: Option<String>,
    },
    /// Write all expenses to a file
    Export {
        /// Destination file
        file: PathBuf,
        /// Document format
        #[arg(short, long, value_enum, default_value_t = Format::Csv)]
        format: Format,
    },
    /// Read expenses from a file
    Import {
        /// Source file
        file: PathBuf,
        /// Document format
        #[arg(short, long, value_enum, default_value_t = Format::Csv)]
        format: Format,
    },
}

/// Handle an expense command
pub fn handle_expense_command(paths: &ShoeboxPaths, cmd: ExpenseCommands) -> ShoeboxResult<()> {
    let table: Table<Expense> = Table::open(&paths.expenses_db())?;
    let audit = AuditLogger::new(paths.audit_log());

    match cmd {
        ExpenseCommands::Add {
            amount,
            category,
            date,
            description,
        } => {
            let date = date
                .unwrap_or_else(|| Local::now().date_naive().format("%Y-%m-%d").to_string());
            let draft = ExpenseDraft::new(amount, &category, &date, description.as_deref())?;
            let id = table.insert(&draft)?;
            let expense = table.get(id)?;

            audit.log(&AuditEntry::create(
                EntityType::Expense,
                id,
                Some(expense_label(&expense)),
                &expense,
            ))?;

            println!(
                "Recorded expense: {:.2} {} on {} (id {})",
                expense.amount, expense.category, expense.date, id
            );
        }

        ExpenseCommands::Show { id } => {
            let expense = table.get(RecordId(id))?;
            print!("{}", format_expense_details(&expense));
        }

        ExpenseCommands::Update {
            id,
            amount,
            category,
            date,
            description,
            clear_description,
        } => {
            if amount.is_none()
                && category.is_none()
                && date.is_none()
                && description.is_none()
                && !clear_description
            {
                println!(
                    "No changes specified. Use --amount, --category, --date, \
                     --description or --clear-description."
                );
                return Ok(());
            }

            let id = RecordId(id);
            let before = table.get(id)?;

            let description = if clear_description {
                FieldUpdate::Clear
            } else {
                match description {
                    Some(value) => FieldUpdate::Set(value),
                    None => FieldUpdate::Keep,
                }
            };
            table.update(
                id,
                ExpensePatch {
                    amount,
                    category,
                    date,
                    description,
                },
            )?;

            let after = table.get(id)?;
            audit.log(&AuditEntry::update(
                EntityType::Expense,
                id,
                Some(expense_label(&after)),
                &before,
                &after,
            ))?;

            println!("Updated expense {}", id);
        }

        ExpenseCommands::Delete { id } => {
            let id = RecordId(id);
            let expense = table.get(id)?;
            table.delete(id)?;

            audit.log(&AuditEntry::delete(
                EntityType::Expense,
                id,
                Some(expense_label(&expense)),
                &expense,
            ))?;

            println!("Deleted expense {}", id);
        }

        ExpenseCommands::List { date, category } => {
            let expenses = if let Some(date) = date {
                table.by_date(&date)?
            } else if let Some(category) = category {
                let category = Category::parse(&category).ok_or_else(|| {
                    ShoeboxError::invalid("category", ValidationReason::UnknownCategory)
                })?;
                table.by_category(category)?
            } else {
                table.list(ListOrder::Display)?
            };
            println!("{}", format_expense_list(&expenses));
        }

        ExpenseCommands::Export { file, format } => {
            let count = TransferService::new(&table).export(&file, format)?;
            println!("Exported {} expenses to: {}", count, file.display());
        }

        ExpenseCommands::Import { file, format } => {
            let report = TransferService::new(&table).import(&file, format, false)?;

            let mut entries = Vec::with_capacity(report.imported_ids.len());
            for id in &report.imported_ids {
                let expense = table.get(*id)?;
                entries.push(AuditEntry::create(
                    EntityType::Expense,
                    *id,
                    Some(expense_label(&expense)),
                    &expense,
                ));
            }
            audit.log_batch(&entries)?;

            println!("Imported from: {}", file.display());
            print!("{}", format_import_report(&report));
        }
    }

    Ok(())
}

/// Short label for audit entries, such as "12.50 food"
fn expense_label(expense: &Expense) -> String {
    format!("{:.2} {}", expense.amount, expense.category)
}
