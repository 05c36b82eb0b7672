use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use tempfile::TempDir;

const BIN_NAME: &str = "budget";

fn budget(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.env("BUDGET_LEDGER_DIR", dir.path())
        .env_remove("BUDGET_LEDGER_FILE")
        .env_remove("RUST_LOG");
    cmd
}

fn ledger_path(dir: &TempDir) -> PathBuf {
    dir.path().join("data").join("budget.csv")
}

#[test]
fn add_then_list_shows_entry() {
    let dir = TempDir::new().unwrap();

    budget(&dir)
        .args(["add", "800", "-c", "Housing", "-d", "Rent"])
        .assert()
        .success()
        .stdout(contains("Entry added with ID: 1"));

    budget(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(contains("Rent").and(contains("£800.00")).and(contains("Housing")));
}

#[test]
fn list_on_empty_ledger() {
    let dir = TempDir::new().unwrap();

    budget(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(contains("No entries found."));
    assert!(!ledger_path(&dir).exists());
}

#[test]
fn add_by_category_number_with_generated_description() {
    let dir = TempDir::new().unwrap();

    budget(&dir)
        .args(["add", "12.5", "-c", "2"])
        .assert()
        .success();

    let contents = fs::read_to_string(ledger_path(&dir)).unwrap();
    assert!(contents.contains("grocery_12.50_GBP"));
}

#[test]
fn add_rejects_non_positive_amount() {
    let dir = TempDir::new().unwrap();

    budget(&dir)
        .args(["add", "-5", "-c", "Food"])
        .assert()
        .failure()
        .stderr(contains("Invalid argument"));
    assert!(!ledger_path(&dir).exists());
}

#[test]
fn add_rejects_unknown_category() {
    let dir = TempDir::new().unwrap();

    budget(&dir)
        .args(["add", "5", "-c", "Snacks"])
        .assert()
        .failure()
        .stderr(contains("Invalid category"));
}

#[test]
fn summary_reports_savings() {
    let dir = TempDir::new().unwrap();

    budget(&dir)
        .args(["income", "set", "1000", "1000"])
        .assert()
        .success();
    budget(&dir)
        .args(["add", "800", "-c", "Housing", "-d", "Rent"])
        .assert()
        .success();

    budget(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(
            contains("Summary for GBP:")
                .and(contains("Housing"))
                .and(contains("40.00 %"))
                .and(contains("1200.00")),
        );
}

#[test]
fn edit_replaces_entry() {
    let dir = TempDir::new().unwrap();

    budget(&dir)
        .args(["add", "3", "-c", "Food", "-d", "Milk"])
        .assert()
        .success();
    budget(&dir)
        .args(["edit", "1", "Oat milk", "4.25", "-c", "Food"])
        .assert()
        .success()
        .stdout(contains("Entry 1 modified"));

    budget(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(contains("Oat milk").and(contains("£4.25")));
}

#[test]
fn delete_unknown_entry_fails() {
    let dir = TempDir::new().unwrap();

    budget(&dir)
        .args(["add", "3", "-c", "Food"])
        .assert()
        .success();

    budget(&dir)
        .args(["delete", "42"])
        .assert()
        .failure()
        .stderr(contains("Entry not found: 42"));

    budget(&dir)
        .args(["rm", "1"])
        .assert()
        .success()
        .stdout(contains("Entry 1 deleted"));
}

#[test]
fn rejected_rate_leaves_ledger_unchanged() {
    let dir = TempDir::new().unwrap();

    budget(&dir)
        .args(["rate", "set", "1.25"])
        .assert()
        .success()
        .stdout(contains("1 GBP = 1.25 USD"));

    budget(&dir)
        .args(["rate", "set", "0"])
        .assert()
        .failure()
        .stderr(contains("Invalid argument"));

    budget(&dir)
        .args(["rate", "show"])
        .assert()
        .success()
        .stdout(contains("1 GBP = 1.25 USD"));
}

#[test]
fn negative_income_is_rejected() {
    let dir = TempDir::new().unwrap();

    budget(&dir)
        .args(["income", "set", "-1", "100"])
        .assert()
        .failure();

    budget(&dir)
        .args(["income", "show"])
        .assert()
        .success()
        .stdout(contains("£4500.00").and(contains("Babu")));
}

#[test]
fn convert_uses_ledger_rate() {
    let dir = TempDir::new().unwrap();

    budget(&dir)
        .args(["convert", "100", "--from", "GBP", "--to", "USD"])
        .assert()
        .success()
        .stdout(contains("£100.00 = $138.00"));
}

#[test]
fn awkward_descriptions_survive_a_round_trip() {
    let dir = TempDir::new().unwrap();

    budget(&dir)
        .args(["add", "9.99", "-c", "Entertainment", "-d", "Cinema, \"popcorn\""])
        .assert()
        .success();

    let contents = fs::read_to_string(ledger_path(&dir)).unwrap();
    assert!(contents.contains("\"Cinema, \"\"popcorn\"\"\""));

    budget(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(contains("Cinema, \"popcorn\""));
}

#[test]
fn malformed_lines_are_skipped_on_load() {
    let dir = TempDir::new().unwrap();
    let path = ledger_path(&dir);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(
        &path,
        "ID,Description,Amount,Category,Currency,Timestamp\n\
         1,Rent,800.00,Housing,GBP,2024-01-05 10:00:00\n\
         2,Mystery,5.00,Snacks,GBP,2024-01-05 10:00:00\n",
    )
    .unwrap();

    budget(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(contains("1 (1 skipped on load)"));
}

#[test]
fn clear_keeps_rate() {
    let dir = TempDir::new().unwrap();

    budget(&dir).args(["rate", "set", "1.5"]).assert().success();
    budget(&dir)
        .args(["add", "10", "-c", "Transport"])
        .assert()
        .success();

    budget(&dir)
        .arg("clear")
        .assert()
        .success()
        .stdout(contains("Cleared 1 entries"));

    budget(&dir)
        .args(["rate", "show"])
        .assert()
        .success()
        .stdout(contains("1.5 USD"));
    budget(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(contains("No entries found."));
}

#[test]
fn file_flag_selects_another_ledger() {
    let dir = TempDir::new().unwrap();

    budget(&dir)
        .args(["--file", "holiday.csv", "add", "20", "-c", "Entertainment"])
        .assert()
        .success();

    assert!(dir.path().join("data").join("holiday.csv").exists());
    assert!(!ledger_path(&dir).exists());
}

#[test]
fn shell_keeps_ids_stable_across_deletes() {
    let dir = TempDir::new().unwrap();

    budget(&dir)
        .arg("shell")
        .write_stdin(
            "add 1 -c Food -d A\n\
             add 1 -c Food -d B\n\
             add 1 -c Food -d C\n\
             delete 1\n\
             delete 2\n\
             save\n\
             exit\n",
        )
        .assert()
        .success()
        .stdout(
            contains("Entry added with ID: 3")
                .and(contains("Entry 2 deleted (B)"))
                .and(contains("renumbered").not()),
        );

    let contents = fs::read_to_string(ledger_path(&dir)).unwrap();
    assert!(contents.contains("\n3,C,1,Food,GBP,"));
    assert!(!contents.contains(",B,"));
}

#[test]
fn shell_discards_unsaved_changes() {
    let dir = TempDir::new().unwrap();

    budget(&dir)
        .arg("shell")
        .write_stdin("add 5 -c Food -d Lunch\nexit\n")
        .assert()
        .success()
        .stderr(contains("unsaved changes were discarded"));

    assert!(!ledger_path(&dir).exists());
}

#[test]
fn shell_reports_errors_and_carries_on() {
    let dir = TempDir::new().unwrap();

    budget(&dir)
        .arg("shell")
        .write_stdin("delete 9\nrate set 0\nadd 2 -c Food -d \"Tea, milk\"\nlist\nsave\n")
        .assert()
        .success()
        .stderr(contains("Entry not found: 9").and(contains("Invalid argument")))
        .stdout(contains("Tea, milk"));
}

#[test]
fn one_shot_delete_warns_that_later_ids_shift() {
    let dir = TempDir::new().unwrap();

    for description in ["A", "B", "C"] {
        budget(&dir)
            .args(["add", "1", "-c", "Food", "-d", description])
            .assert()
            .success();
    }

    budget(&dir)
        .args(["delete", "1"])
        .assert()
        .success()
        .stdout(contains("Entry 1 deleted (A)").and(contains("renumbered")));

    budget(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(contains("1      B").and(contains("2      C")));

    budget(&dir)
        .args(["delete", "2"])
        .assert()
        .success()
        .stdout(contains("Entry 2 deleted (C)").and(contains("renumbered").not()));
}

#[test]
fn list_columns_are_padded() {
    let dir = TempDir::new().unwrap();

    budget(&dir)
        .args(["add", "1", "-c", "Food", "-d", "B"])
        .assert()
        .success();

    budget(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(contains("1      B                           £1.00  Food           GBP  "));
}

#[test]
fn rust_log_enables_debug_without_verbose() {
    let dir = TempDir::new().unwrap();

    budget(&dir)
        .args(["add", "1", "-c", "Food"])
        .assert()
        .success()
        .stderr(contains("saved ledger").not());

    budget(&dir)
        .env("RUST_LOG", "family_ledger=debug")
        .args(["add", "1", "-c", "Food"])
        .assert()
        .success()
        .stderr(contains("added entry").and(contains("saved ledger")));
}
