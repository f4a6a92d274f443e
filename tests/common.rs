#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Build a `fichajes` command with HOME pointed at a throwaway directory,
/// so tests never read or write the real config file.
pub fn fichajes(home: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("fichajes");
    cmd.env("HOME", home);
    cmd.env_remove("APPDATA");
    cmd
}

/// Create a unique fake home directory inside the system temp dir.
pub fn setup_test_home(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_fichajes_home", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create test home");
    path.to_string_lossy().to_string()
}

/// Write a config file under the fake home, as `fichajes init` would.
pub fn write_config(home: &str, yaml: &str) {
    let dir = PathBuf::from(home).join(".fichajes");
    fs::create_dir_all(&dir).expect("create config dir");
    fs::write(dir.join("fichajes.conf"), yaml).expect("write config");
}

/// A base URL nothing listens on; commands that validate input before
/// talking to the backend must fail without ever needing it.
pub const DEAD_URL: &str = "http://127.0.0.1:9";
