use std::time::Duration;

use clap::{Args, ValueEnum};
use serde::Deserialize;

use datagrepper_api::{DEFAULT_ENDPOINT, QueryOptions, package_from_path};

use crate::error::FeedError;

// ═══════════════════════════════════════════════════════════════
//  Config file (TOML)
// ═══════════════════════════════════════════════════════════════

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub endpoint: Option<String>,
    pub timeout_secs: Option<u64>,
    pub user_agent: Option<String>,
    pub format: Option<OutputFormat>,
}

pub fn load_config(path: &str) -> Result<Config, FeedError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| FeedError::Config(format!("cannot read config {path}: {e}")))?;
    parse_config(&content).map_err(|e| FeedError::Config(format!("bad config {path}: {e}")))
}

fn parse_config(content: &str) -> Result<Config, toml::de::Error> {
    toml::from_str(content)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

// ═══════════════════════════════════════════════════════════════
//  CLI args
// ═══════════════════════════════════════════════════════════════

#[derive(Args, Clone, Debug)]
pub struct FeedArgs {
    /// Path to the TOML config file
    #[arg(long, default_value = "dg-feed.toml", env = "DG_FEED_CONFIG")]
    pub config: String,

    /// Datagrepper base URL
    #[arg(long, env = "DATAGREPPER_URL")]
    pub endpoint: Option<String>,

    /// Package name (e.g. firefox)
    #[arg(required_unless_present = "path", conflicts_with = "path")]
    pub package: Option<String>,

    /// Package page path to take the name from, e.g. /pkgs/firefox/overview/
    #[arg(long)]
    pub path: Option<String>,

    /// Page number
    #[arg(long)]
    pub page: Option<u64>,

    /// Only messages from the last N seconds
    #[arg(long)]
    pub delta: Option<u64>,

    /// Range start, epoch seconds
    #[arg(long)]
    pub start: Option<i64>,

    /// Range end, epoch seconds
    #[arg(long)]
    pub end: Option<i64>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// HTTP timeout in seconds (none by default)
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Print the request URL and exit
    #[arg(long)]
    pub print_url: bool,
}

// ═══════════════════════════════════════════════════════════════
//  Effective — merged config
// ═══════════════════════════════════════════════════════════════

/// Final settings: defaults < config file < env/CLI.
#[derive(Debug)]
pub struct Effective {
    pub endpoint: String,
    pub package: String,
    pub options: QueryOptions,
    pub format: OutputFormat,
    pub timeout: Option<Duration>,
    pub user_agent: String,
    pub print_url: bool,
}

impl Effective {
    pub fn new(args: &FeedArgs) -> Result<Self, FeedError> {
        let cfg = match load_config(&args.config) {
            Ok(c) => c,
            Err(e) => {
                if std::path::Path::new(&args.config).exists() {
                    return Err(e);
                }
                tracing::debug!(config = %args.config, "no config file, using defaults");
                Config::default()
            }
        };
        Self::merge(args, cfg)
    }

    fn merge(args: &FeedArgs, cfg: Config) -> Result<Self, FeedError> {
        let package = match (&args.package, &args.path) {
            (Some(name), _) => name.trim().to_string(),
            (None, Some(path)) => package_from_path(path)
                .ok_or_else(|| FeedError::Package(format!("could not find package name in '{path}'")))?
                .to_string(),
            (None, None) => String::new(),
        };
        if package.is_empty() {
            return Err(FeedError::Package("package name is required".into()));
        }

        Ok(Self {
            endpoint: args
                .endpoint
                .clone()
                .or(cfg.endpoint)
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            package,
            options: QueryOptions {
                page: args.page,
                delta: args.delta,
                start: args.start,
                end: args.end,
            },
            format: args.format.or(cfg.format).unwrap_or_default(),
            timeout: args
                .timeout
                .or(cfg.timeout_secs)
                .map(Duration::from_secs),
            user_agent: cfg
                .user_agent
                .unwrap_or_else(|| concat!("dg-feed/", env!("CARGO_PKG_VERSION")).to_string()),
            print_url: args.print_url,
        })
    }
}
