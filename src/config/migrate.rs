//! Config-file migrations: older installs predate some keys, so `config
//! --check` reports what is missing and `config --migrate` fills the gaps
//! with defaults without touching the values already set.

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use serde_yaml::Value;
use std::fs;
use std::path::Path;

/// Keys a complete config file carries, with their default YAML values.
fn expected_keys() -> Vec<(&'static str, Value)> {
    vec![
        ("api_url", Value::String(super::DEFAULT_API_URL.into())),
        ("timezone", Value::String(super::DEFAULT_TIMEZONE.into())),
        ("origin", Value::String("cli".into())),
        ("default_estimate_hours", Value::Number(4.into())),
        ("token", Value::Null),
    ]
}

fn load_mapping(path: &Path) -> AppResult<Value> {
    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
    serde_yaml::from_str::<Value>(&content)
        .map_err(|e| AppError::Config(format!("unparsable config file: {e}")))
}

/// Report missing keys without changing anything.
pub fn check(path: &Path) -> AppResult<Vec<String>> {
    let yaml = load_mapping(path)?;
    let map = yaml
        .as_mapping()
        .ok_or_else(|| AppError::Config("config file is not a YAML mapping".into()))?;

    let missing = expected_keys()
        .into_iter()
        .filter(|(key, _)| !map.contains_key(Value::String((*key).into())))
        .map(|(key, _)| key.to_string())
        .collect();
    Ok(missing)
}

/// Fill missing keys with defaults and rewrite the file. Returns the keys
/// that were added. Idempotent: a complete file is left untouched.
pub fn run(path: &Path) -> AppResult<Vec<String>> {
    let mut yaml = load_mapping(path)?;
    let map = yaml
        .as_mapping_mut()
        .ok_or_else(|| AppError::Config("config file is not a YAML mapping".into()))?;

    let mut added = Vec::new();
    for (key, default) in expected_keys() {
        let k = Value::String(key.into());
        if !map.contains_key(&k) {
            map.insert(k, default);
            added.push(key.to_string());
        }
    }

    if added.is_empty() {
        info("Configuration is up to date");
        return Ok(added);
    }

    let serialized =
        serde_yaml::to_string(&yaml).map_err(|e| AppError::Config(e.to_string()))?;
    fs::write(path, serialized).map_err(|_| AppError::ConfigSave)?;
    success(format!("Added missing config keys: {}", added.join(", ")));
    Ok(added)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn temp_conf(name: &str, content: &str) -> std::path::PathBuf {
        let mut p = env::temp_dir();
        p.push(format!("{name}_fichajes.conf"));
        fs::write(&p, content).unwrap();
        p
    }

    #[test]
    fn check_reports_missing_keys() {
        let p = temp_conf("check_missing", "api_url: http://localhost:8080\n");
        let missing = check(&p).unwrap();
        assert!(missing.contains(&"timezone".to_string()));
        assert!(missing.contains(&"token".to_string()));
        assert!(!missing.contains(&"api_url".to_string()));
        fs::remove_file(&p).ok();
    }

    #[test]
    fn run_fills_defaults_and_is_idempotent() {
        let p = temp_conf("migrate_fills", "api_url: http://backend:9090\n");
        let added = run(&p).unwrap();
        assert!(added.contains(&"timezone".to_string()));

        // Values already present survive the rewrite.
        let content = fs::read_to_string(&p).unwrap();
        assert!(content.contains("http://backend:9090"));
        assert!(content.contains("Europe/Madrid"));

        let added_again = run(&p).unwrap();
        assert!(added_again.is_empty());
        fs::remove_file(&p).ok();
    }
}
