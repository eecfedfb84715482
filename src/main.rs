use anyhow::Result;
use clap::{Parser, Subcommand};

use shoebox::audit::AuditLogger;
use shoebox::cli::{
    handle_contact_command, handle_expense_command, ContactCommands, ExpenseCommands,
};
use shoebox::config::ShoeboxPaths;

#[derive(Parser)]
#[command(
    name = "shoebox",
    version,
    about = "Contact book and expense log for the terminal",
    long_about = "Shoebox keeps two small ledgers, a contact book and an expense \
                  log, in per-domain SQLite stores. Records are validated on the \
                  way in and can be exported to or imported from CSV and JSON \
                  files."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Contact book commands
    #[command(subcommand)]
    Contact(ContactCommands),

    /// Expense log commands
    #[command(subcommand)]
    Expense(ExpenseCommands),

    /// Show recent audit log entries
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = ShoeboxPaths::new()?;
    paths.ensure_directories()?;

    match cli.command {
        Some(Commands::Contact(cmd)) => {
            handle_contact_command(&paths, cmd)?;
        }
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&paths, cmd)?;
        }
        Some(Commands::Audit { limit }) => {
            let logger = AuditLogger::new(paths.audit_log());
            let entries = logger.read_recent(limit)?;
            if entries.is_empty() {
                println!("Audit log is empty.");
            } else {
                for entry in entries {
                    println!("{}", entry.format_human_readable());
                }
            }
        }
        Some(Commands::Config) => {
            println!("Shoebox Configuration");
            println!("=====================");
            println!("Data directory: {}", paths.base_dir().display());
            println!("Contacts store: {}", paths.contacts_db().display());
            println!("Expenses store: {}", paths.expenses_db().display());
            println!("Audit log:      {}", paths.audit_log().display());
        }
        None => {
            println!("Shoebox - contact book and expense log");
            println!();
            println!("Run 'shoebox --help' for usage information.");
        }
    }

    Ok(())
}
