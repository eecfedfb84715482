//! End-to-end tests that drive the shoebox binary the way a user would.
//!
//! Every test points SHOEBOX_DATA_DIR at its own temp directory so the
//! stores and audit log never touch the real platform data dir.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn shoebox(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("shoebox").unwrap();
    cmd.env("SHOEBOX_DATA_DIR", data_dir);
    cmd
}

#[test]
fn add_and_list_contacts() {
    let dir = TempDir::new().unwrap();

    shoebox(dir.path())
        .args(["contact", "add", "Ann Bell", "555-0100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added contact: Ann Bell (id 1)"));

    shoebox(dir.path())
        .args(["contact", "add", "Bob Ray", "555-0101", "-e", "bob@example.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added contact: Bob Ray (id 2)"));

    shoebox(dir.path())
        .args(["contact", "list"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Ann Bell")
                .and(predicate::str::contains("Bob Ray"))
                .and(predicate::str::contains("bob@example.com")),
        );
}

#[test]
fn list_is_friendly_when_empty() {
    let dir = TempDir::new().unwrap();

    shoebox(dir.path())
        .args(["contact", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No contacts yet."));

    shoebox(dir.path())
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses recorded."));
}

#[test]
fn add_rejects_empty_name() {
    let dir = TempDir::new().unwrap();

    shoebox(dir.path())
        .args(["contact", "add", "   ", "555-0100"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid name: must not be empty"));

    shoebox(dir.path())
        .args(["contact", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No contacts yet."));
}

#[test]
fn add_rejects_malformed_email() {
    let dir = TempDir::new().unwrap();

    shoebox(dir.path())
        .args(["contact", "add", "Ann", "555-0100", "-e", "not-an-email"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Invalid email: must look like name@example.com",
        ));
}

#[test]
fn show_update_delete_flow() {
    let dir = TempDir::new().unwrap();

    shoebox(dir.path())
        .args(["contact", "add", "Ann Bell", "555-0100"])
        .assert()
        .success();

    shoebox(dir.path())
        .args(["contact", "show", "1"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Contact: Ann Bell")
                .and(predicate::str::contains("555-0100")),
        );

    shoebox(dir.path())
        .args(["contact", "update", "1", "-p", "555-9999"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated contact: Ann Bell"));

    shoebox(dir.path())
        .args(["contact", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("555-9999"));

    shoebox(dir.path())
        .args(["contact", "delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted contact: Ann Bell"));

    shoebox(dir.path())
        .args(["contact", "show", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Contact not found: id 1"));
}

#[test]
fn update_without_flags_changes_nothing() {
    let dir = TempDir::new().unwrap();

    shoebox(dir.path())
        .args(["contact", "add", "Ann", "555-0100"])
        .assert()
        .success();

    shoebox(dir.path())
        .args(["contact", "update", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No changes specified."));
}

#[test]
fn clear_email_removes_the_address() {
    let dir = TempDir::new().unwrap();

    shoebox(dir.path())
        .args(["contact", "add", "Ann", "555-0100", "-e", "ann@example.com"])
        .assert()
        .success();

    shoebox(dir.path())
        .args(["contact", "update", "1", "--clear-email"])
        .assert()
        .success();

    shoebox(dir.path())
        .args(["contact", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ann@example.com").not());
}

#[test]
fn export_then_import_into_fresh_store() {
    let source = TempDir::new().unwrap();
    let target = TempDir::new().unwrap();
    let file = source.path().join("contacts.csv");

    shoebox(source.path())
        .args(["contact", "add", "Ann Bell", "555-0100"])
        .assert()
        .success();
    shoebox(source.path())
        .args(["contact", "add", "Bob Ray", "555-0101", "-e", "bob@example.com"])
        .assert()
        .success();

    shoebox(source.path())
        .args(["contact", "export"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 2 contacts to:"));

    shoebox(target.path())
        .args(["contact", "import"])
        .arg(&file)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Imported:    2")
                .and(predicate::str::contains("Duplicates:  0")),
        );

    shoebox(target.path())
        .args(["contact", "list"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Ann Bell").and(predicate::str::contains("Bob Ray")),
        );
}

#[test]
fn reimport_is_suppressed_unless_allowed() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("contacts.csv");

    shoebox(dir.path())
        .args(["contact", "add", "Ann Bell", "555-0100"])
        .assert()
        .success();
    shoebox(dir.path())
        .args(["contact", "export"])
        .arg(&file)
        .assert()
        .success();

    shoebox(dir.path())
        .args(["contact", "import"])
        .arg(&file)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Imported:    0")
                .and(predicate::str::contains("Duplicates:  1")),
        );

    shoebox(dir.path())
        .args(["contact", "import"])
        .arg(&file)
        .arg("--allow-duplicates")
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported:    1"));
}

#[test]
fn import_keeps_going_past_bad_rows() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("partial.csv");
    std::fs::write(&file, "name,phone\nAnn,555-0100\nBob,\n").unwrap();

    shoebox(dir.path())
        .args(["contact", "import"])
        .arg(&file)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Imported:    1")
                .and(predicate::str::contains("Skipped:     1"))
                .and(predicate::str::contains("row 2: missing phone")),
        );

    shoebox(dir.path())
        .args(["contact", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ann").and(predicate::str::contains("Bob").not()));
}

#[test]
fn import_rejects_missing_file() {
    let dir = TempDir::new().unwrap();

    shoebox(dir.path())
        .args(["contact", "import", "nowhere.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nowhere.csv"));
}

#[test]
fn expense_add_and_filtered_list() {
    let dir = TempDir::new().unwrap();

    shoebox(dir.path())
        .args(["expense", "add", "12.50", "food", "-d", "2024-03-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Recorded expense: 12.50 food on 2024-03-01 (id 1)",
        ));
    shoebox(dir.path())
        .args(["expense", "add", "80", "transport", "-d", "2024-03-02"])
        .assert()
        .success();

    shoebox(dir.path())
        .args(["expense", "list", "--date", "2024-03-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("food").and(predicate::str::contains("transport").not()));

    shoebox(dir.path())
        .args(["expense", "list", "--category", "transport"])
        .assert()
        .success()
        .stdout(predicate::str::contains("80.00").and(predicate::str::contains("12.50").not()));
}

#[test]
fn expense_rejects_unknown_category() {
    let dir = TempDir::new().unwrap();

    shoebox(dir.path())
        .args(["expense", "add", "5", "snacks", "-d", "2024-03-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Invalid category: is not a known category",
        ));
}

#[test]
fn expense_list_filters_are_exclusive() {
    let dir = TempDir::new().unwrap();

    shoebox(dir.path())
        .args([
            "expense",
            "list",
            "--date",
            "2024-03-01",
            "--category",
            "food",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn expense_json_round_trip() {
    let source = TempDir::new().unwrap();
    let target = TempDir::new().unwrap();
    let file = source.path().join("expenses.json");

    shoebox(source.path())
        .args(["expense", "add", "99.95", "other", "-d", "2024-01-15"])
        .arg("--description")
        .arg("annual fee")
        .assert()
        .success();

    shoebox(source.path())
        .args(["expense", "export"])
        .arg(&file)
        .args(["-f", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 expenses to:"));

    shoebox(target.path())
        .args(["expense", "import"])
        .arg(&file)
        .args(["-f", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported:    1"));

    shoebox(target.path())
        .args(["expense", "show", "1"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("99.95")
                .and(predicate::str::contains("2024-01-15"))
                .and(predicate::str::contains("annual fee")),
        );
}

#[test]
fn audit_records_operations() {
    let dir = TempDir::new().unwrap();

    shoebox(dir.path())
        .args(["contact", "add", "Ann Bell", "555-0100"])
        .assert()
        .success();
    shoebox(dir.path())
        .args(["contact", "delete", "1"])
        .assert()
        .success();

    shoebox(dir.path())
        .arg("audit")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("CREATE Contact 1 (Ann Bell)")
                .and(predicate::str::contains("DELETE Contact 1 (Ann Bell)")),
        );
}

#[test]
fn audit_is_empty_at_first() {
    let dir = TempDir::new().unwrap();

    shoebox(dir.path())
        .arg("audit")
        .assert()
        .success()
        .stdout(predicate::str::contains("Audit log is empty."));
}

#[test]
fn config_prints_resolved_paths() {
    let dir = TempDir::new().unwrap();

    shoebox(dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Data directory:")
                .and(predicate::str::contains(dir.path().to_str().unwrap()))
                .and(predicate::str::contains("contacts.db"))
                .and(predicate::str::contains("audit.log")),
        );
}
