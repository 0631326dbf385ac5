use anyhow::{anyhow, Result};
use chrono::Duration;
use std::env;
use std::path::PathBuf;

const DEFAULT_CONTENT_DIR: &str = "./content";

#[derive(Debug, Clone)]
pub struct Config {
    pub telegram_bot_token: String,
    pub http_port: u16,
    /// Directory holding `dare.json` and `truth.json`
    pub content_dir: PathBuf,
    /// Refuse to start when a content file cannot be loaded
    pub content_required: bool,
    /// Users allowed to stop a running game
    pub operator_ids: Vec<u64>,
    /// Minutes before an unanswered turn is skipped; 0 disables the sweep
    pub turn_timeout_minutes: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let token = env::var("TELEGRAM_BOT_TOKEN")
            .map_err(|_| anyhow!("TELEGRAM_BOT_TOKEN must be set"))?;

        if token.trim().is_empty() {
            return Err(anyhow!("TELEGRAM_BOT_TOKEN must be set"));
        }

        let port_str = env::var("HTTP_PORT").unwrap_or_else(|_| "3000".to_string());
        let http_port = port_str
            .trim()
            .parse()
            .map_err(|_| anyhow!("Invalid HTTP_PORT"))?;

        let content_dir = env::var("CONTENT_DIR")
            .ok()
            .filter(|dir| !dir.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_CONTENT_DIR.to_string());

        let content_required = match env::var("CONTENT_REQUIRED") {
            Ok(raw) => parse_flag(&raw).ok_or_else(|| anyhow!("Invalid CONTENT_REQUIRED"))?,
            Err(_) => true,
        };

        let operator_ids = match env::var("OPERATOR_IDS") {
            Ok(raw) => parse_operator_ids(&raw)?,
            Err(_) => Vec::new(),
        };

        let turn_timeout_minutes = env::var("TURN_TIMEOUT_MINUTES")
            .unwrap_or_else(|_| "0".to_string())
            .trim()
            .parse::<u64>()
            .ok()
            .filter(|minutes| timeout_duration(*minutes).is_some())
            .ok_or_else(|| anyhow!("Invalid TURN_TIMEOUT_MINUTES"))?;

        Ok(Config {
            telegram_bot_token: token,
            http_port,
            content_dir: PathBuf::from(content_dir.trim()),
            content_required,
            operator_ids,
            turn_timeout_minutes,
        })
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "" | "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Turn timeout as a duration; `None` when chrono cannot represent it
pub fn timeout_duration(minutes: u64) -> Option<Duration> {
    i64::try_from(minutes).ok().and_then(Duration::try_minutes)
}

/// Parses a comma-separated list of Telegram user ids
pub fn parse_operator_ids(raw: &str) -> Result<Vec<u64>> {
    raw.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(|id| {
            id.parse::<u64>()
                .map_err(|_| anyhow!("Invalid OPERATOR_IDS entry '{}'", id))
        })
        .collect()
}
