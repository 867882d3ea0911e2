use clap::Parser;
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Config file picked up from the working directory when none is given.
const DEFAULT_CONFIG_FILE: &str = "config.yaml";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, env = "CONFIG_FILE")]
    pub config: Option<String>,

    /// Address to bind
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(long)]
    pub port: Option<u16>,

    /// Emit logs as JSON
    #[arg(long)]
    pub json_logs: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
    pub request_timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UiConfig {
    /// Name shown in the header, footer and page titles.
    pub site_name: String,
    /// Directory served under `/static`.
    pub static_dir: String,
    /// How long the "connection restored" banner stays up.
    pub restore_banner_ms: u64,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub format: LogFormat,
    pub filter: String,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                port: 3000,
                host: "0.0.0.0".to_string(),
                request_timeout_secs: 30,
            },
            ui: UiConfig {
                site_name: "Comic Reader".to_string(),
                static_dir: "static".to_string(),
                restore_banner_ms: 3000,
            },
            logging: LoggingConfig {
                format: LogFormat::Pretty,
                filter: "info".to_string(),
            },
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from_args(std::env::args())
    }

    pub fn load_from_args<I, T>(args: I) -> Result<Self, config::ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli =
            Cli::try_parse_from(args).map_err(|e| config::ConfigError::Message(e.to_string()))?;

        let defaults = Self::default();
        let mut builder = Config::builder();

        // 1. Defaults
        builder = builder
            .set_default("server.port", defaults.server.port)?
            .set_default("server.host", defaults.server.host)?
            .set_default(
                "server.request_timeout_secs",
                defaults.server.request_timeout_secs,
            )?
            .set_default("ui.site_name", defaults.ui.site_name)?
            .set_default("ui.static_dir", defaults.ui.static_dir)?
            .set_default("ui.restore_banner_ms", defaults.ui.restore_banner_ms)?
            .set_default("logging.format", "pretty")?
            .set_default("logging.filter", defaults.logging.filter)?;

        // 2. Config file: explicit path must exist, the cwd fallback is optional
        if let Some(path) = &cli.config {
            builder = builder.add_source(File::new(path, FileFormat::Yaml).required(true));
        } else if Path::new(DEFAULT_CONFIG_FILE).exists() {
            builder = builder.add_source(File::new(DEFAULT_CONFIG_FILE, FileFormat::Yaml));
        }

        // 3. Environment variables, e.g. COMIC_SERVER__PORT=8000
        builder = builder.add_source(
            Environment::with_prefix("COMIC")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        // 4. CLI flags win over everything
        if let Some(host) = cli.host {
            builder = builder.set_override("server.host", host)?;
        }
        if let Some(port) = cli.port {
            builder = builder.set_override("server.port", port)?;
        }
        if cli.json_logs {
            builder = builder.set_override("logging.format", "json")?;
        }

        let cfg: Self = builder.build()?.try_deserialize()?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> Result<(), config::ConfigError> {
        if self.server.port == 0 {
            return Err(config::ConfigError::Message(
                "server.port must be non-zero".to_string(),
            ));
        }
        if self.ui.restore_banner_ms == 0 {
            return Err(config::ConfigError::Message(
                "ui.restore_banner_ms must be greater than zero".to_string(),
            ));
        }
        if self.ui.site_name.trim().is_empty() {
            return Err(config::ConfigError::Message(
                "ui.site_name cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}
