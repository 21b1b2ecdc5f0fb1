use tracing::info;

pub const API_KEY_VAR: &str = "OPENWEATHER_API_KEY";
pub const STORAGE_ACCOUNT_NAME_VAR: &str = "AZURE_STORAGE_ACCOUNT_NAME";
pub const STORAGE_ACCOUNT_KEY_VAR: &str = "AZURE_STORAGE_ACCOUNT_KEY";
pub const CONTAINER_NAME_VAR: &str = "AZURE_STORAGE_CONTAINER_NAME";

/// Container used when `AZURE_STORAGE_CONTAINER_NAME` is unset.
pub const DEFAULT_CONTAINER_NAME: &str = "weather-data";

/// Process-wide settings, resolved once at startup.
///
/// Nothing is validated: an empty key or account name is handed to the
/// clients as-is and surfaces later as a request or storage failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_key: String,
    pub storage_account_name: String,
    pub storage_account_key: String,
    pub container_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            storage_account_name: String::new(),
            storage_account_key: String::new(),
            container_name: DEFAULT_CONTAINER_NAME.to_string(),
        }
    }
}

impl Config {
    /// Resolve settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolve settings from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            api_key: lookup(API_KEY_VAR).unwrap_or_default(),
            storage_account_name: lookup(STORAGE_ACCOUNT_NAME_VAR).unwrap_or_default(),
            storage_account_key: lookup(STORAGE_ACCOUNT_KEY_VAR).unwrap_or_default(),
            container_name: lookup(CONTAINER_NAME_VAR)
                .unwrap_or_else(|| DEFAULT_CONTAINER_NAME.to_string()),
        }
    }

    /// Write the storage settings to the log. The account key is not redacted.
    pub fn log_resolved(&self) {
        info!("Storage Account Name: {}", self.storage_account_name);
        info!("Storage Account Key: {}", self.storage_account_key);
        info!("Container Name: {}", self.container_name);
    }
}
