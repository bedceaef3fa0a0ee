use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn bin(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("mini-crm").unwrap();
    cmd.env("STORE_BACKEND", "json");
    cmd.env("CONTACTS_PATH", dir.path().join("contacts.json"));
    cmd
}

#[test]
fn add_assigns_increasing_ids() {
    let dir = TempDir::new().unwrap();

    bin(&dir)
        .args(["add", "--name", "Ann", "--email", "ann@x.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact added with id 1"));

    bin(&dir)
        .args(["add", "--name", "Bob", "--email", "bob@x.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact added with id 2"));
}

#[test]
fn add_rejects_invalid_email() {
    let dir = TempDir::new().unwrap();

    // More than one '@'
    bin(&dir)
        .args(["add", "--name", "Ann", "--email", "a@@b.com"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation"));

    // Domain lacks a dot
    bin(&dir)
        .args(["add", "--name", "Ann", "--email", "a@b"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation"));

    // Nothing was persisted
    bin(&dir)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No contact yet"));
}

#[test]
fn add_rejects_blank_name() {
    let dir = TempDir::new().unwrap();

    bin(&dir)
        .args(["add", "--name", "   ", "--email", "ann@x.com"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation"));
}

#[test]
fn explicit_id_must_be_unique() {
    let dir = TempDir::new().unwrap();

    bin(&dir)
        .args(["add", "--id", "7", "--name", "Ann", "--email", "ann@x.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact added with id 7"));

    bin(&dir)
        .args(["add", "--id", "7", "--name", "Bob", "--email", "bob@x.com"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    // A store-assigned id lands past the explicit one
    bin(&dir)
        .args(["add", "--name", "Cleo", "--email", "cleo@x.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact added with id 8"));
}

#[test]
fn explicit_id_zero_is_rejected() {
    let dir = TempDir::new().unwrap();

    bin(&dir)
        .args(["add", "--id", "0", "--name", "Ann", "--email", "ann@x.com"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("positive integer"));
}
