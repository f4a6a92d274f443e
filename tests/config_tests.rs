use predicates::str::contains;

mod common;
use common::{fichajes, setup_test_home, write_config};

#[test]
fn test_config_print_requires_init() {
    let home = setup_test_home("config_no_file");
    fichajes(&home)
        .args(["config", "--print"])
        .assert()
        .failure()
        .stderr(contains("run `fichajes init` first"));
}

#[test]
fn test_config_print_shows_file() {
    let home = setup_test_home("config_print");
    write_config(&home, "api_url: http://backend:9090\ntimezone: Europe/Madrid\n");
    fichajes(&home)
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("http://backend:9090"));
}

#[test]
fn test_config_check_reports_missing_keys() {
    let home = setup_test_home("config_check_missing");
    write_config(&home, "api_url: http://backend:9090\n");
    fichajes(&home)
        .args(["config", "--check"])
        .assert()
        .success()
        .stderr(contains("Missing config keys"))
        .stderr(contains("timezone"));
}

#[test]
fn test_config_migrate_then_check_passes() {
    let home = setup_test_home("config_migrate");
    write_config(&home, "api_url: http://backend:9090\n");

    fichajes(&home)
        .args(["config", "--migrate"])
        .assert()
        .success()
        .stdout(contains("Added missing config keys"));

    fichajes(&home)
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("Configuration is complete"));
}
