//! Expense display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Expense;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
}

impl From<&Expense> for ExpenseRow {
    fn from(expense: &Expense) -> Self {
        Self {
            id: expense.id.as_i64(),
            amount: format!("{:.2}", expense.amount),
            category: expense.category.to_string(),
            date: expense.date.clone(),
            description: expense.description.clone().unwrap_or_default(),
        }
    }
}

/// Format a list of expenses as a table
pub fn format_expense_list(expenses: &[Expense]) -> String {
    if expenses.is_empty() {
        return "No expenses recorded.".to_string();
    }

    let rows: Vec<ExpenseRow> = expenses.iter().map(ExpenseRow::from).collect();
    let mut table = Table::new(rows);
    table.with(Style::psql());
    table.to_string()
}

/// Format a single expense's details
pub fn format_expense_details(expense: &Expense) -> String {
    let mut output = String::new();
    output.push_str(&format!("Expense: {}\n", expense.id));
    output.push_str(&format!("  Amount:   {:.2}\n", expense.amount));
    output.push_str(&format!("  Category: {}\n", expense.category));
    output.push_str(&format!("  Date:     {}\n", expense.date));
    if let Some(description) = &expense.description {
        output.push_str(&format!("  Note:     {}\n", description));
    }
    output
}
