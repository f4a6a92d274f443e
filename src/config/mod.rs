use crate::ui::messages;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

pub mod migrate;

pub const DEFAULT_API_URL: &str = "http://localhost:8080";
pub const DEFAULT_TIMEZONE: &str = "Europe/Madrid";

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the fichajesPi backend.
    pub api_url: String,
    /// IANA zone used to display and edit naive UTC timestamps.
    #[serde(default = "default_timezone")]
    pub timezone: String,
    /// `origen` tag attached to clock events created by this client.
    #[serde(default = "default_origin")]
    pub origin: String,
    /// Hours sent with the estimate when `clock --hours` is omitted.
    #[serde(default = "default_estimate_hours")]
    pub default_estimate_hours: f64,
    /// Optional bearer token added to every request.
    #[serde(default)]
    pub token: Option<String>,
}

fn default_timezone() -> String {
    DEFAULT_TIMEZONE.to_string()
}
fn default_origin() -> String {
    "cli".to_string()
}
fn default_estimate_hours() -> f64 {
    4.0
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timezone: default_timezone(),
            origin: default_origin(),
            default_estimate_hours: default_estimate_hours(),
            token: None,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("fichajes")
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".fichajes")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("fichajes.conf")
    }

    /// Load configuration from file, or return defaults if not found.
    /// A corrupt file is reported and replaced by defaults rather than
    /// aborting the command.
    pub fn load() -> Self {
        let path = Self::config_file();
        if !path.exists() {
            return Self::default();
        }
        match fs::read_to_string(&path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(cfg) => cfg,
                Err(e) => {
                    messages::warning(format!(
                        "Could not parse {:?} ({}); using defaults",
                        path, e
                    ));
                    Self::default()
                }
            },
            Err(e) => {
                messages::warning(format!("Could not read {:?} ({}); using defaults", path, e));
                Self::default()
            }
        }
    }

    /// Write this configuration to the standard location.
    pub fn save(&self) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;
        let yaml = serde_yaml::to_string(self)
            .map_err(|e| io::Error::other(format!("Failed to serialize config: {e}")))?;
        let mut file = fs::File::create(Self::config_file())?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    /// Initialize the config file. `is_test` skips the write so test runs
    /// never touch the real home directory.
    pub fn init_all(api_url: Option<String>, is_test: bool) -> io::Result<()> {
        let mut config = Config::default();
        if let Some(url) = api_url {
            config.api_url = url;
        }

        if !is_test {
            config.save()?;
            println!("✅ Config file: {:?}", Self::config_file());
        }
        println!("✅ Backend:     {}", config.api_url);
        println!("✅ Timezone:    {}", config.timezone);

        Ok(())
    }
}
