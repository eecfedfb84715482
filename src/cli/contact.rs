//! Contact CLI commands

use std::path::PathBuf;

use clap::Subcommand;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::ShoeboxPaths;
use crate::display::{format_contact_details, format_contact_list, format_import_report};
use crate::error::ShoeboxResult;
use crate::interchange::Format;
use crate::models::{Contact, ContactDraft, ContactPatch, FieldUpdate, RecordId};
use crate::services::TransferService;
use crate::store::{ListOrder, Table};

/// Contact subcommands
#[derive(Subcommand)]
pub enum ContactCommands {
    /// Add a new contact
    Add {
        /// Contact name
        name: String,
        /// Phone number
        phone: String,
        /// Email address
        #[arg(short, long)]
        email: Option<String>,
    },
    /// Show one contact
    Show {
        /// Contact id
        id: i64,
    },
    /// Change stored fields of a contact
    Update {
        /// Contact id
        id: i64,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New phone number
        #[arg(short, long)]
        phone: Option<String>,
        /// New email address
        #[arg(short, long)]
        email: Option<String>,
        /// Remove the stored email address
        #[arg(long, conflicts_with = "email")]
        clear_email: bool,
    },
    /// Delete a contact
    Delete {
        /// Contact id
        id: i64,
    },
    /// List all contacts, sorted by name
    List,
    /// Write all contacts to a file
    Export {
        /// Destination file
        file: PathBuf,
        /// Document format
        #[arg(short, long, value_enum, default_value_t = Format::Csv)]
        format: Format,
    },
    /// Read contacts from a file
    Import {
        /// Source file
        file: PathBuf,
        /// Document format
        #[arg(short, long, value_enum, default_value_t = Format::Csv)]
        format: Format,
        /// Insert rows even when an equal contact is already stored
        #[arg(long)]
        allow_duplicates: bool,
    },
}

/// Handle a contact command
pub fn handle_contact_command(paths: &ShoeboxPaths, cmd: ContactCommands) -> ShoeboxResult<()> {
    let table: Table<Contact> = Table::open(&paths.contacts_db())?;
    let audit = AuditLogger::new(paths.audit_log());

    match cmd {
        ContactCommands::Add { name, phone, email } => {
            let draft = ContactDraft::new(&name, &phone, email.as_deref())?;
            let id = table.insert(&draft)?;
            let contact = table.get(id)?;

            audit.log(&AuditEntry::create(
                EntityType::Contact,
                id,
                Some(contact.name.clone()),
                &contact,
            ))?;

            println!("Added contact: {} (id {})", contact.name, id);
        }

        ContactCommands::Show { id } => {
            let contact = table.get(RecordId(id))?;
            print!("{}", format_contact_details(&contact));
        }

        ContactCommands::Update {
            id,
            name,
            phone,
            email,
            clear_email,
        } => {
            if name.is_none() && phone.is_none() && email.is_none() && !clear_email {
                println!(
                    "No changes specified. Use --name, --phone, --email or --clear-email."
                );
                return Ok(());
            }

            let id = RecordId(id);
            let before = table.get(id)?;

            let email = if clear_email {
                FieldUpdate::Clear
            } else {
                match email {
                    Some(value) => FieldUpdate::Set(value),
                    None => FieldUpdate::Keep,
                }
            };
            table.update(id, ContactPatch { name, phone, email })?;

            let after = table.get(id)?;
            audit.log(&AuditEntry::update(
                EntityType::Contact,
                id,
                Some(after.name.clone()),
                &before,
                &after,
            ))?;

            println!("Updated contact: {}", after.name);
        }

        ContactCommands::Delete { id } => {
            let id = RecordId(id);
            let contact = table.get(id)?;
            table.delete(id)?;

            audit.log(&AuditEntry::delete(
                EntityType::Contact,
                id,
                Some(contact.name.clone()),
                &contact,
            ))?;

            println!("Deleted contact: {}", contact.name);
        }

        ContactCommands::List => {
            let contacts = table.list(ListOrder::Display)?;
            println!("{}", format_contact_list(&contacts));
        }

        ContactCommands::Export { file, format } => {
            let count = TransferService::new(&table).export(&file, format)?;
            println!("Exported {} contacts to: {}", count, file.display());
        }

        ContactCommands::Import {
            file,
            format,
            allow_duplicates,
        } => {
            let report =
                TransferService::new(&table).import(&file, format, !allow_duplicates)?;

            let mut entries = Vec::with_capacity(report.imported_ids.len());
            for id in &report.imported_ids {
                let contact = table.get(*id)?;
                entries.push(AuditEntry::create(
                    EntityType::Contact,
                    *id,
                    Some(contact.name.clone()),
                    &contact,
                ));
            }
            audit.log_batch(&entries)?;

            println!("Imported from: {}", file.display());
            print!("{}", format_import_report(&report));
        }
    }

    Ok(())
}
