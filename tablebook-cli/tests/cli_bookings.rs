use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

const BENSON: &str = "98765432";
const ALICE: &str = "94351253";
const FUTURE: &str = "2099-04-01 7:00 PM";

fn tablebook(home: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("tablebook"));
    cmd.env("HOME", home)
        .env("USERPROFILE", home)
        .env_remove("TABLEBOOK_DATA")
        .env("NO_COLOR", "1");
    cmd
}

fn data_file(home: &TempDir) -> PathBuf {
    home.path().join("data").join("book.json")
}

fn with_data(home: &TempDir) -> Command {
    let mut cmd = tablebook(home.path());
    cmd.arg("--data").arg(data_file(home));
    cmd
}

fn add_person(home: &TempDir, name: &str, phone: &str) {
    with_data(home)
        .args([
            "person", "add", "--name", name, "--phone", phone, "--email", "someone@example.com",
            "--address", "123, Jurong West Ave 6",
        ])
        .assert()
        .success()
        .stdout(contains("New person added: "));
}

fn book(home: &TempDir, phone: &str, date: &str) -> assert_cmd::assert::Assert {
    with_data(home)
        .args(["book", "--phone", phone, "--date", date, "--pax", "4", "--remark", "Team Dinner"])
        .assert()
}

#[test]
fn booking_flow_persists_between_invocations() {
    let home = TempDir::new().expect("home");
    add_person(&home, "Benson Meier", BENSON);

    book(&home, BENSON, FUTURE)
        .success()
        .stdout(contains("New booking added: "))
        .stdout(contains(format!(
            "Booking Date: 2099-04-01 7:00 PM; Booking Number: {BENSON}; Pax: 4; Remark: Team Dinner"
        )))
        .stdout(contains("Warning").not());

    let json = fs::read_to_string(data_file(&home)).expect("data file written");
    let doc: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(doc["bookings"][0]["bookingId"], 1);
    assert_eq!(doc["bookings"][0]["status"], "UPCOMING");
    assert_eq!(doc["persons"][0]["bookingIds"][0], 1);

    book(&home, BENSON, "2099-04-02 8:30 PM").success();
    let doc: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(data_file(&home)).unwrap()).unwrap();
    assert_eq!(doc["bookings"][1]["bookingId"], 2);
}

#[test]
fn past_booking_warns_but_is_added() {
    let home = TempDir::new().expect("home");
    add_person(&home, "Benson Meier", BENSON);

    book(&home, BENSON, "2000-01-01 7:00 PM")
        .success()
        .stdout(contains(
            "Warning: You are adding a booking for a past date!\nNew booking added: \n",
        ));
}

#[test]
fn booking_for_unknown_phone_fails() {
    let home = TempDir::new().expect("home");
    book(&home, BENSON, FUTURE)
        .failure()
        .stderr(contains("No person with the given phone number exists"));
    assert!(!data_file(&home).exists());
}

#[test]
fn invalid_pax_is_rejected_by_the_parser() {
    let home = TempDir::new().expect("home");
    add_person(&home, "Benson Meier", BENSON);
    with_data(&home)
        .args(["book", "--phone", BENSON, "--date", FUTURE, "--pax", "0"])
        .assert()
        .failure()
        .stderr(contains("--pax"));
}

#[test]
fn bedit_and_bstatus_update_the_booking() {
    let home = TempDir::new().expect("home");
    add_person(&home, "Benson Meier", BENSON);
    book(&home, BENSON, FUTURE).success();

    with_data(&home)
        .args(["bedit", "1", "--pax", "6", "--remark", "Anniversary"])
        .assert()
        .success()
        .stdout(contains("Edited Booking: "))
        .stdout(contains("Pax: 6; Remark: Anniversary"));

    with_data(&home)
        .args(["bstatus", "1", "completed"])
        .assert()
        .success()
        .stdout(contains("Booking 1 marked as COMPLETED: "));

    with_data(&home)
        .args(["bedit", "9", "--pax", "2"])
        .assert()
        .failure()
        .stderr(contains("No booking with ID 9 was found."));

    with_data(&home)
        .args(["bedit", "1"])
        .assert()
        .failure()
        .stderr(contains("At least one field to edit must be provided."));
}

#[test]
fn filter_reports_matches_and_unknown_phones() {
    let home = TempDir::new().expect("home");
    add_person(&home, "Benson Meier", BENSON);
    add_person(&home, "Alice Pauline", ALICE);
    book(&home, BENSON, FUTURE).success();

    with_data(&home)
        .args(["filter", "--phone", BENSON, "--status", "upcoming"])
        .assert()
        .success()
        .stdout(contains(format!(
            "Here are the bookings for phone number {BENSON} with status UPCOMING:"
        )));

    with_data(&home)
        .args(["filter", "--phone", ALICE])
        .assert()
        .success()
        .stdout(contains(format!("No bookings found for phone number {ALICE}.")));

    with_data(&home)
        .args(["filter", "--phone", "11112222"])
        .assert()
        .failure()
        .stderr(contains("No person found with phone number: 11112222"));
}

#[test]
fn list_json_contains_every_booking() {
    let home = TempDir::new().expect("home");
    add_person(&home, "Benson Meier", BENSON);
    book(&home, BENSON, FUTURE).success();

    let output = with_data(&home)
        .args(["list", "--format", "json"])
        .output()
        .expect("run list");
    assert!(output.status.success());
    let payload: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(payload["feedback"], "Listed all bookings");
    assert_eq!(payload["bookings"][0]["id"], 1);
    assert_eq!(payload["bookings"][0]["name"], "Benson Meier");
    assert_eq!(payload["bookings"][0]["bookingDate"], "2099-04-01T19:00:00");
}

#[test]
fn full_format_prints_every_field() {
    let home = TempDir::new().expect("home");
    add_person(&home, "Benson Meier", BENSON);
    with_data(&home)
        .args(["book", "-p", BENSON, "-d", FUTURE, "-x", "4", "-t", "vip", "-t", "window"])
        .assert()
        .success();

    with_data(&home)
        .args(["filter", "--phone", BENSON, "--format", "full"])
        .assert()
        .success()
        .stdout(contains("1. Booking ID: 1 Booking Date: 2099-04-01 7:00 PM Booked On: "))
        .stdout(contains(format!(
            "Booked By: Benson Meier; Phone: {BENSON}; Email: someone@example.com; \
             Address: 123, Jurong West Ave 6; Tags: ; Member: No \
             Tags: [vip, window] Status: UPCOMING Remarks:  Pax: 4"
        )));
}

#[test]
fn person_find_and_duplicates() {
    let home = TempDir::new().expect("home");
    add_person(&home, "Benson Meier", BENSON);
    add_person(&home, "Alice Pauline", ALICE);

    with_data(&home)
        .args(["person", "find", "alice"])
        .assert()
        .success()
        .stdout(contains("1 persons listed!"))
        .stdout(contains("Alice Pauline"))
        .stdout(contains("Benson Meier").not());

    with_data(&home)
        .args([
            "person", "add", "--name", "Other", "--phone", ALICE, "--email", "o@example.com",
            "--address", "Somewhere",
        ])
        .assert()
        .failure()
        .stderr(contains("This person already exists in the address book"));
}

#[test]
fn prefs_choose_the_default_data_file() {
    let home = TempDir::new().expect("home");
    tablebook(home.path())
        .args([
            "person", "add", "--name", "Benson Meier", "--phone", BENSON, "--email",
            "b@example.com", "--address", "Clementi",
        ])
        .assert()
        .success();
    assert!(home.path().join(".tablebook").join("addressbook.json").exists());
    assert!(home.path().join(".tablebook").join("preferences.json").exists());

    let custom = home.path().join("elsewhere.json");
    fs::write(
        home.path().join(".tablebook").join("preferences.json"),
        serde_json::json!({ "addressBookFilePath": custom }).to_string(),
    )
    .unwrap();
    tablebook(home.path())
        .args(["person", "list"])
        .assert()
        .success()
        .stdout(contains("Listed all persons"))
        .stdout(contains("Benson Meier").not());
}

#[test]
fn corrupt_data_file_is_reported() {
    let home = TempDir::new().expect("home");
    let path = data_file(&home);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "{ not json").unwrap();

    with_data(&home)
        .args(["list"])
        .assert()
        .failure()
        .stderr(contains("failed to load address book"));
}
