use predicates::str::contains;
use std::path::PathBuf;

mod common;
use common::{fichajes, setup_test_home};

#[test]
fn test_help_lists_subcommands() {
    let home = setup_test_home("help");
    fichajes(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("clock"))
        .stdout(contains("employee"))
        .stdout(contains("event"))
        .stdout(contains("schedule"));
}

#[test]
fn test_init_test_mode_writes_nothing() {
    let home = setup_test_home("init_test_mode");
    fichajes(&home)
        .args(["--test", "--api-url", "http://backend:9090", "init"])
        .assert()
        .success()
        .stdout(contains("http://backend:9090"))
        .stdout(contains("Europe/Madrid"));

    let conf = PathBuf::from(&home).join(".fichajes").join("fichajes.conf");
    assert!(!conf.exists());
}

#[test]
fn test_init_creates_config_file() {
    let home = setup_test_home("init_writes");
    fichajes(&home)
        .args(["--api-url", "http://backend:9090", "init"])
        .assert()
        .success();

    let conf = PathBuf::from(&home).join(".fichajes").join("fichajes.conf");
    let content = std::fs::read_to_string(conf).expect("config written");
    assert!(content.contains("http://backend:9090"));
    assert!(content.contains("Europe/Madrid"));
}

#[test]
fn test_schedule_days_prints_weekday_numbering() {
    let home = setup_test_home("schedule_days");
    fichajes(&home)
        .args(["schedule", "days"])
        .assert()
        .success()
        .stdout(contains("1 Lunes"))
        .stdout(contains("7 Domingo"));
}

#[test]
fn test_schedule_zones_prints_catalog() {
    let home = setup_test_home("schedule_zones");
    fichajes(&home)
        .args(["schedule", "zones"])
        .assert()
        .success()
        .stdout(contains("Europe/Madrid"))
        .stdout(contains("America/New_York"));
}
