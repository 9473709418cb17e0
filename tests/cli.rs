use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn contacts(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("contacts").unwrap();
    cmd.env("CONTACTS_DATA_DIR", data_dir.path())
        .env_remove("CONTACTS_LOG");
    cmd
}

#[test]
fn shell_adds_and_lists_contacts() {
    let data_dir = TempDir::new().unwrap();

    contacts(&data_dir)
        .write_stdin("hello\nadd John 1234567890\nadd John 0987654321\nall\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("How can I help you?"))
        .stdout(predicate::str::contains("Contact added."))
        .stdout(predicate::str::contains("Contact updated."))
        .stdout(predicate::str::contains(
            "Contact name: John, phones: 1234567890; 0987654321",
        ))
        .stdout(predicate::str::contains("Good bye!"));
}

#[test]
fn bad_input_does_not_end_session() {
    let data_dir = TempDir::new().unwrap();

    contacts(&data_dir)
        .write_stdin("add John 12\nadd\nfoo\nchange John 1 2\nall\nclose\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Phone number must be exactly 10 digits."))
        .stdout(predicate::str::contains("Not enough arguments. Usage: add NAME PHONE"))
        .stdout(predicate::str::contains("Unknown command."))
        .stdout(predicate::str::contains("Contact not found."))
        .stdout(predicate::str::contains("No contacts saved."));
}

#[test]
fn contacts_persist_between_runs() {
    let data_dir = TempDir::new().unwrap();

    contacts(&data_dir)
        .write_stdin("add Ann 0501112233\nadd-birthday Ann 15.08.1985\nexit\n")
        .assert()
        .success();

    assert!(data_dir.path().join("data").join("contacts.json").exists());

    contacts(&data_dir)
        .write_stdin("show-birthday Ann\nphone Ann\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("15.08.1985"))
        .stdout(predicate::str::contains("Ann: 0501112233"));
}

#[test]
fn ukrainian_locale_flag() {
    let data_dir = TempDir::new().unwrap();

    contacts(&data_dir)
        .args(["--locale", "uk"])
        .write_stdin("all\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Вас вітає бот-асистент!"))
        .stdout(predicate::str::contains("Немає контактів."))
        .stdout(predicate::str::contains("До побачення!"));
}

#[test]
fn end_of_input_exits_cleanly() {
    let data_dir = TempDir::new().unwrap();

    contacts(&data_dir)
        .write_stdin("add Bob 1112223334\n")
        .assert()
        .success();

    contacts(&data_dir)
        .write_stdin("all\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact name: Bob, phones: 1112223334"));
}

#[test]
fn config_shows_paths() {
    let data_dir = TempDir::new().unwrap();

    contacts(&data_dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("contacts.json"))
        .stdout(predicate::str::contains("Locale:"));
}

#[test]
fn init_writes_settings() {
    let data_dir = TempDir::new().unwrap();

    contacts(&data_dir).arg("init").assert().success();
    assert!(data_dir.path().join("config.json").exists());
}
