use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color flag for testing
fn agenda_cmd() -> Command {
    let mut cmd = Command::cargo_bin("agenda").expect("Failed to find agenda binary");
    cmd.arg("--no-color");
    cmd
}

fn add_product(db_path: &str, title: &str, price: &str) {
    agenda_cmd()
        .args([
            "--database-file",
            db_path,
            "product",
            "add",
            title,
            "--price",
            price,
            "--category",
            "clasicas",
            "--kind",
            "manicure",
        ])
        .assert()
        .success();
}

fn book_appointment(db_path: &str, client: &str, date: &str) {
    agenda_cmd()
        .args([
            "--database-file",
            db_path,
            "appointment",
            "book",
            client,
            "1",
            "--date",
            date,
            "--slot",
            "8:15 a 10:00",
            "--payment-method",
            "yape",
        ])
        .assert()
        .success();
}

#[test]
fn test_cli_add_product() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    agenda_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "product",
            "add",
            "Manicura Francesa",
            "--price",
            "60",
            "--category",
            "clasicas",
            "--kind",
            "manicure",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created product with ID: 1"))
        .stdout(predicate::str::contains("Manicura Francesa"))
        .stdout(predicate::str::contains("S/ 60"));
}

#[test]
fn test_cli_book_appointment() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db = db_path.to_str().unwrap();

    add_product(db, "Manicura Francesa", "60");

    agenda_cmd()
        .args([
            "--database-file",
            db,
            "appointment",
            "book",
            "Ana",
            "1",
            "--date",
            "2024-06-01",
            "--slot",
            "8:15 a 10:00",
            "--payment-method",
            "yape",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Booked appointment with ID: 1"))
        .stdout(predicate::str::contains("○ Pendiente"))
        .stdout(predicate::str::contains("8:15 a 10:00"));
}

#[test]
fn test_cli_book_with_transfer_shows_reference() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db = db_path.to_str().unwrap();

    add_product(db, "Manicura Francesa", "60");

    agenda_cmd()
        .args([
            "--database-file",
            db,
            "appointment",
            "book",
            "Ana",
            "1",
            "--date",
            "2024-06-01",
            "--slot",
            "8:15 a 10:00",
            "--payment-method",
            "transferencia",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Transfer reference:"));
}

#[test]
fn test_cli_book_rejects_unknown_slot() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db = db_path.to_str().unwrap();

    add_product(db, "Manicura Francesa", "60");

    agenda_cmd()
        .args([
            "--database-file",
            db,
            "appointment",
            "book",
            "Ana",
            "1",
            "--date",
            "2024-06-01",
            "--slot",
            "9:00 a 11:00",
            "--payment-method",
            "yape",
        ])
        .assert()
        .failure();
}

#[test]
fn test_cli_book_rejects_missing_product() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    agenda_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "appointment",
            "book",
            "Ana",
            "42",
            "--date",
            "2024-06-01",
            "--slot",
            "8:15 a 10:00",
            "--payment-method",
            "yape",
        ])
        .assert()
        .failure();
}

#[test]
fn test_cli_default_lists_appointments() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    agenda_cmd()
        .args(["--database-file", db_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("No appointments found."));
}

#[test]
fn test_cli_list_appointments_by_date_range() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db = db_path.to_str().unwrap();

    add_product(db, "Manicura Francesa", "60");
    book_appointment(db, "Ana", "2024-06-01");
    book_appointment(db, "Lucía", "2024-07-15");

    agenda_cmd()
        .args([
            "--database-file",
            db,
            "appointment",
            "list",
            "--from",
            "2024-06-01",
            "--to",
            "2024-06-30",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ana"))
        .stdout(predicate::str::contains("Lucía").not());
}

#[test]
fn test_cli_update_appointment_status() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db = db_path.to_str().unwrap();

    add_product(db, "Manicura Francesa", "60");
    book_appointment(db, "Ana", "2024-06-01");

    agenda_cmd()
        .args([
            "--database-file",
            db,
            "appointment",
            "update",
            "1",
            "--status",
            "completado",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated appointment with ID: 1"))
        .stdout(predicate::str::contains("✓ Completado"))
        .stdout(predicate::str::contains("Ana"));
}

#[test]
fn test_cli_delete_requires_confirmation() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db = db_path.to_str().unwrap();

    add_product(db, "Manicura Francesa", "60");
    book_appointment(db, "Ana", "2024-06-01");

    agenda_cmd()
        .args(["--database-file", db, "appointment", "delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--confirm"));

    agenda_cmd()
        .args([
            "--database-file",
            db,
            "appointment",
            "delete",
            "1",
            "--confirm",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted appointment for 'Ana'"));
}

#[test]
fn test_cli_slots_lists_all_intervals() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    agenda_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "appointment",
            "slots",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("8:15 a 10:00"))
        .stdout(predicate::str::contains("20:15 a 22:00"));
}

#[test]
fn test_cli_create_invoice_computes_total() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db = db_path.to_str().unwrap();

    add_product(db, "Manicura Francesa", "60");
    add_product(db, "Diseño Floral", "80");

    agenda_cmd()
        .args([
            "--database-file",
            db,
            "invoice",
            "create",
            "Ana",
            "--dni",
            "12345678",
            "--email",
            "ana@example.com",
            "--payment-method",
            "plin",
            "--products",
            "1,2",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created invoice with ID: 1"))
        .stdout(predicate::str::contains("Total: S/ 140"));

    agenda_cmd()
        .args(["--database-file", db, "invoice", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: S/ 140"))
        .stdout(predicate::str::contains("Products: 2"));
}

#[test]
fn test_cli_create_invoice_rejects_bad_dni() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db = db_path.to_str().unwrap();

    add_product(db, "Manicura Francesa", "60");

    agenda_cmd()
        .args([
            "--database-file",
            db,
            "invoice",
            "create",
            "Ana",
            "--dni",
            "1234",
            "--email",
            "ana@example.com",
            "--payment-method",
            "plin",
            "--products",
            "1",
        ])
        .assert()
        .failure();
}

#[test]
fn test_cli_product_delete_and_show() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db = db_path.to_str().unwrap();

    add_product(db, "Manicura Francesa", "60");

    agenda_cmd()
        .args(["--database-file", db, "product", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Manicura Francesa"));

    agenda_cmd()
        .args([
            "--database-file",
            db,
            "product",
            "delete",
            "1",
            "--confirm",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted product 'Manicura Francesa'"));

    agenda_cmd()
        .args(["--database-file", db, "product", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not found"));
}
