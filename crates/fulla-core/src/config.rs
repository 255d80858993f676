//! Settings for the DigitalOcean client.
//!
//! The bearer token lives in a small JSON config file under the user's
//! config directory. On first run the file is created with a null token so
//! the user has an obvious place to paste their credential.

use crate::error::{Error, Result};
use secrecy::SecretString;
use std::path::{Path, PathBuf};

/// Default base URL for the DigitalOcean v2 API.
pub const DEFAULT_API_BASE_URL: &str = "https://api.digitalocean.com/v2/";

/// Relative config file location inside the user config directory.
const CONFIG_RELATIVE_PATH: &str = "fulla/config";

/// Process-lifetime settings, constructed once at startup.
///
/// Unlike the usual "global settings" pattern this struct is passed by
/// reference to everything that needs it; nothing reads ambient state.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Path the token was loaded from (or created at).
    config_path: PathBuf,

    /// Bearer token, if one has been configured.
    token: Option<SecretString>,

    /// API base URL, joined with relative request paths.
    api_base_url: String,
}

impl Settings {
    /// Resolve the per-user config path and load settings from it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the config directory cannot be resolved or
    /// the file cannot be read or created, and [`Error::MalformedConfig`]
    /// if an existing file is not valid JSON or lacks a `token` key.
    pub fn load() -> Result<Self> {
        let path = default_config_path()?;
        Self::load_from(path)
    }

    /// Load settings from an explicit config file path.
    ///
    /// If the file exists it is parsed and its `token` value extracted. If
    /// it does not exist, parent directories are created and a fresh
    /// `{"token": null}` file is written; an existing file is never
    /// overwritten.
    pub fn load_from(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let token = if path.exists() {
            read_token(&path)?
        } else {
            initialize_config_file(&path)?;
            None
        };

        Ok(Self {
            config_path: path,
            token,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        })
    }

    /// Path of the config file backing these settings.
    #[must_use]
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// API base URL.
    #[must_use]
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// Override the API base URL.
    #[must_use]
    pub fn with_api_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api_base_url = base_url.into();
        self
    }

    /// Whether a token is present.
    #[must_use]
    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// Return the bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingToken`] when the config file holds a null
    /// token, pointing the user at the file to edit.
    pub fn bearer_token(&self) -> Result<&SecretString> {
        self.token.as_ref().ok_or_else(|| {
            Error::MissingToken(format!(
                "set the `token` field in {}",
                self.config_path.display()
            ))
        })
    }
}

fn default_config_path() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_RELATIVE_PATH))
        .ok_or_else(|| Error::Io("could not determine the user config directory".to_string()))
}

fn read_token(path: &Path) -> Result<Option<SecretString>> {
    let contents = std::fs::read_to_string(path)?;
    let parsed: serde_json::Value = serde_json::from_str(&contents).map_err(|err| {
        Error::MalformedConfig(format!("{} is not valid JSON: {err}", path.display()))
    })?;

    let token = parsed.get("token").ok_or_else(|| {
        Error::MalformedConfig(format!("{} has no `token` key", path.display()))
    })?;

    match token {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::String(value) => Ok(Some(SecretString::from(value.clone()))),
        other => Err(Error::MalformedConfig(format!(
            "`token` in {} must be a string or null, got {other}",
            path.display()
        ))),
    }
}

fn initialize_config_file(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let contents = serde_json::to_string_pretty(&serde_json::json!({ "token": null }))?;
    std::fs::write(path, contents)?;
    Ok(())
}
