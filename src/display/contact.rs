//! Contact display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Contact;

#[derive(Tabled)]
struct ContactRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Phone")]
    phone: String,
    #[tabled(rename = "Email")]
    email: String,
}

impl From<&Contact> for ContactRow {
    fn from(contact: &Contact) -> Self {
        Self {
            id: contact.id.as_i64(),
            name: contact.name.clone(),
            phone: contact.phone.clone(),
            email: contact.email.clone().unwrap_or_default(),
        }
    }
}

/// Format a list of contacts as a table
pub fn format_contact_list(contacts: &[Contact]) -> String {
    if contacts.is_empty() {
        return "No contacts yet.".to_string();
    }

    let rows: Vec<ContactRow> = contacts.iter().map(ContactRow::from).collect();
    let mut table = Table::new(rows);
    table.with(Style::psql());
    table.to_string()
}

/// Format a single contact's details
pub fn format_contact_details(contact: &Contact) -> String {
    let mut output = String::new();
    output.push_str(&format!("Contact: {}\n", contact.name));
    output.push_str(&format!("  ID:    {}\n", contact.id));
    output.push_str(&format!("  Phone: {}\n", contact.phone));
    if let Some(email) = &contact.email {
        output.push_str(&format!("  Email: {}\n", email));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RecordId;

    fn contact(id: i64, name: &str, email: Option<&str>) -> Contact {
        Contact {
            id: RecordId(id),
            name: name.to_string(),
            phone: "123".to_string(),
            email: email.map(String::from),
        }
    }

    #[test]
    fn test_format_contact_list() {
        let contacts = vec![
            contact(1, "Ann", Some("ann@example.com")),
            contact(2, "Bob", None),
        ];

        let output = format_contact_list(&contacts);
        assert!(output.contains("Name"));
        assert!(output.contains("Ann"));
        assert!(output.contains("ann@example.com"));
        assert!(output.contains("Bob"));
    }

    #[test]
    fn test_format_empty_list() {
        assert_eq!(format_contact_list(&[]), "No contacts yet.");
    }

    #[test]
    fn test_format_contact_details() {
        let output = format_contact_details(&contact(1, "Ann", Some("ann@example.com")));
        assert!(output.contains("Contact: Ann"));
        assert!(output.contains("Phone: 123"));
        assert!(output.contains("Email: ann@example.com"));
    }

    #[test]
    fn test_details_without_email() {
        let output = format_contact_details(&contact(2, "Bob", None));
        assert!(!output.contains("Email"));
    }
}
