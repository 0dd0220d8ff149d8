use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use portal_core::{PageKey, PortalLocale, PortalRole, OTP_CODE_LENGTH};
use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_API_BASE: &str = "http://localhost:8080";
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10_000;

fn parse_positive_u64(value: &str) -> Result<u64, String> {
    let parsed = value
        .parse::<u64>()
        .map_err(|error| format!("failed to parse integer: {error}"))?;
    if parsed == 0 {
        return Err("value must be greater than 0".to_string());
    }
    Ok(parsed)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GatewayKind {
    /// Real auth endpoints under `--api-base`.
    Http,
    /// Offline gateway accepting `--mock-otp`.
    Mock,
}

#[derive(Debug, Parser)]
#[command(
    name = "portal-shell",
    about = "Scripted two-role portal session rendered to HTML",
    version
)]
pub struct Cli {
    #[arg(
        long,
        env = "PORTAL_API_BASE",
        help = "Base URL of the auth API (default http://localhost:8080)."
    )]
    pub api_base: Option<String>,

    #[arg(
        long,
        env = "PORTAL_REQUEST_TIMEOUT_MS",
        value_parser = parse_positive_u64,
        help = "Per-request timeout for auth calls in milliseconds."
    )]
    pub request_timeout_ms: Option<u64>,

    #[arg(long, env = "PORTAL_LOCALE", help = "Message table: english or bilingual.")]
    pub locale: Option<PortalLocale>,

    #[arg(long, value_enum, env = "PORTAL_GATEWAY")]
    pub gateway: Option<GatewayKind>,

    #[arg(long, help = "Code accepted by the mock gateway.")]
    pub mock_otp: Option<String>,

    #[arg(long, help = "JSON file used as client-local token storage.")]
    pub token_store: Option<PathBuf>,

    #[arg(long, help = "TOML file supplying defaults for the options above.")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "JSON scenario script; replaces the step flags below.")]
    pub script: Option<PathBuf>,

    #[arg(long, default_value = "student")]
    pub role: PortalRole,

    #[arg(long)]
    pub identity: Option<String>,

    #[arg(long)]
    pub password: Option<String>,

    #[arg(long)]
    pub otp: Option<String>,

    #[arg(long = "page", help = "Menu page to open after login; repeatable.")]
    pub pages: Vec<PageKey>,

    #[arg(long = "chat", help = "Support chat message to send; repeatable.")]
    pub chat: Vec<String>,

    #[arg(long)]
    pub logout: bool,

    #[arg(long, help = "Write the final document here instead of stdout.")]
    pub out: Option<PathBuf>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid value for {key}: {reason}")]
    InvalidValue { key: &'static str, reason: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
/// Keys accepted in the `--config` TOML file.
pub struct FileConfig {
    pub api_base: Option<String>,
    pub request_timeout_ms: Option<u64>,
    pub locale: Option<PortalLocale>,
    pub gateway: Option<GatewayKind>,
    pub mock_otp: Option<String>,
    pub token_store: Option<PathBuf>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Effective runtime settings: CLI over file over built-in defaults.
pub struct PortalConfig {
    pub api_base: String,
    pub request_timeout_ms: u64,
    pub locale: PortalLocale,
    pub gateway: GatewayKind,
    pub mock_otp: String,
    pub token_store: Option<PathBuf>,
}

impl PortalConfig {
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let file = match &cli.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };
        Self::merge(cli, file)
    }

    pub fn merge(cli: &Cli, file: FileConfig) -> Result<Self, ConfigError> {
        let api_base = cli
            .api_base
            .clone()
            .or(file.api_base)
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        let request_timeout_ms = cli
            .request_timeout_ms
            .or(file.request_timeout_ms)
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_MS);
        let gateway = cli.gateway.or(file.gateway).unwrap_or(GatewayKind::Http);
        let mock_otp = cli
            .mock_otp
            .clone()
            .or(file.mock_otp)
            .unwrap_or_else(|| portal_auth::DEFAULT_MOCK_OTP.to_string());

        let config = Self {
            api_base: api_base.trim().to_string(),
            request_timeout_ms,
            locale: cli.locale.or(file.locale).unwrap_or_default(),
            gateway,
            mock_otp: mock_otp.trim().to_string(),
            token_store: cli.token_store.clone().or(file.token_store),
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.request_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                key: "request-timeout-ms",
                reason: "value must be greater than 0".to_string(),
            });
        }
        if self.gateway == GatewayKind::Http && self.api_base.is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "api-base",
                reason: "http gateway requires a base url".to_string(),
            });
        }
        let otp_is_code = self.mock_otp.chars().count() == OTP_CODE_LENGTH
            && self.mock_otp.chars().all(|ch| ch.is_ascii_digit());
        if self.gateway == GatewayKind::Mock && !otp_is_code {
            return Err(ConfigError::InvalidValue {
                key: "mock-otp",
                reason: format!("expected {OTP_CODE_LENGTH} digits"),
            });
        }
        Ok(())
    }
}
