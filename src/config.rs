use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

pub const GITHUB_API_URL: &str = "https://api.github.com";
pub const GOOGLE_REVOKE_URL: &str = "https://oauth2.googleapis.com/revoke";
/// Largest page GitHub serves for list endpoints.
pub const MAX_PER_PAGE: u8 = 100;

#[derive(Clone, Serialize, Deserialize)]
pub struct Config {
    pub username: String,
    pub api_host: String,
    pub per_page: u8,
    pub github_token: Option<String>,
    pub token_endpoint: Option<String>,
    pub revoke_endpoint: String,
    pub output_dir: PathBuf,
    pub log_level: String,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("username", &self.username)
            .field("api_host", &self.api_host)
            .field("per_page", &self.per_page)
            .field("github_token", &self.github_token.as_ref().map(|_| "[REDACTED]"))
            .field("token_endpoint", &self.token_endpoint)
            .field("revoke_endpoint", &self.revoke_endpoint)
            .field("output_dir", &self.output_dir)
            .field("log_level", &self.log_level)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            username: String::new(),
            api_host: GITHUB_API_URL.to_string(),
            per_page: MAX_PER_PAGE,
            github_token: None,
            token_endpoint: None,
            revoke_endpoint: GOOGLE_REVOKE_URL.to_string(),
            output_dir: PathBuf::from("site"),
            log_level: "info".to_string(),
        }
    }
}

/// Values given on the command line; they win over every other layer.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub config_file: Option<PathBuf>,
    pub username: Option<String>,
    pub log_level: Option<String>,
    pub output_dir: Option<PathBuf>,
    pub token_endpoint: Option<String>,
}

impl Config {
    pub fn load(overrides: &Overrides) -> Self {
        let config_file = overrides
            .config_file
            .clone()
            .unwrap_or_else(|| config_dir().join("showcase").join("config.toml"));

        match Self::figment(&config_file, overrides).extract::<Config>() {
            Ok(config) => config.normalized(),
            Err(e) => {
                eprintln!("warning: config parse error, using defaults: {e}");
                Config::default().with_overrides(overrides).normalized()
            }
        }
    }

    fn figment(config_file: &std::path::Path, overrides: &Overrides) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));

        if config_file.exists() {
            figment = figment.merge(Toml::file(config_file));
        }

        figment = figment.merge(Env::prefixed("SHOWCASE_")).merge(
            Env::raw()
                .only(&["GITHUB_TOKEN"])
                .map(|_| "github_token".into()),
        );

        if let Some(ref user) = overrides.username {
            figment = figment.merge(Serialized::default("username", user));
        }
        if let Some(ref level) = overrides.log_level {
            figment = figment.merge(Serialized::default("log_level", level));
        }
        if let Some(ref dir) = overrides.output_dir {
            figment = figment.merge(Serialized::default("output_dir", dir));
        }
        if let Some(ref endpoint) = overrides.token_endpoint {
            figment = figment.merge(Serialized::default("token_endpoint", endpoint));
        }
        figment
    }

    fn with_overrides(mut self, overrides: &Overrides) -> Self {
        if let Some(ref user) = overrides.username {
            self.username = user.clone();
        }
        if let Some(ref level) = overrides.log_level {
            self.log_level = level.clone();
        }
        if let Some(ref dir) = overrides.output_dir {
            self.output_dir = dir.clone();
        }
        if let Some(ref endpoint) = overrides.token_endpoint {
            self.token_endpoint = Some(endpoint.clone());
        }
        self
    }

    fn normalized(mut self) -> Self {
        self.per_page = self.per_page.clamp(1, MAX_PER_PAGE);
        self.username = self.username.trim().to_string();
        if self.github_token.as_deref().is_some_and(str::is_empty) {
            self.github_token = None;
        }
        self
    }

    /// The effective config as TOML, with secrets masked.
    pub fn to_redacted_toml(&self) -> Result<String, toml::ser::Error> {
        let mut shown = self.clone();
        if shown.github_token.is_some() {
            shown.github_token = Some("[REDACTED]".to_string());
        }
        toml::to_string_pretty(&shown)
    }
}

pub fn config_dir() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .map(PathBuf::from)
        .or_else(|| {
            std::env::var("HOME")
                .ok()
                .map(|h| PathBuf::from(h).join(".config"))
        })
        .unwrap_or_else(|| PathBuf::from("."))
}
