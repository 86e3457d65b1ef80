use std::env;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use avalia_export::render::RenderOptions;

const DEFAULT_BIND: &str = "127.0.0.1:8080";
const DEFAULT_SESSION_TTL_MINUTES: u64 = 120;
const DEFAULT_MAX_SESSIONS: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    /// Idle time after which a session and its record are discarded.
    pub session_ttl: Duration,
    pub max_sessions: usize,
    pub log_format: LogFormat,
    /// JSON file with document styles and letterhead.
    pub document_config: Option<PathBuf>,
}

impl ServerConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from any key lookup; unset keys take their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let bind = lookup("AVALIA_BIND")
            .unwrap_or_else(|| DEFAULT_BIND.to_string())
            .parse()
            .map_err(|e| eyre::eyre!("invalid AVALIA_BIND: {e}"))?;

        let ttl_minutes = match lookup("AVALIA_SESSION_TTL_MINUTES") {
            Some(raw) => raw
                .parse::<u64>()
                .map_err(|e| eyre::eyre!("invalid AVALIA_SESSION_TTL_MINUTES '{raw}': {e}"))?,
            None => DEFAULT_SESSION_TTL_MINUTES,
        };
        let ttl_secs = ttl_minutes
            .checked_mul(60)
            .ok_or_else(|| eyre::eyre!("AVALIA_SESSION_TTL_MINUTES '{ttl_minutes}' is too large"))?;

        let max_sessions = match lookup("AVALIA_MAX_SESSIONS") {
            Some(raw) => raw
                .parse::<usize>()
                .map_err(|e| eyre::eyre!("invalid AVALIA_MAX_SESSIONS '{raw}': {e}"))?,
            None => DEFAULT_MAX_SESSIONS,
        };

        let log_format = match lookup("AVALIA_LOG_FORMAT").as_deref() {
            None | Some("text") => LogFormat::Text,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(eyre::eyre!(
                    "invalid AVALIA_LOG_FORMAT '{other}' (expected 'text' or 'json')"
                ));
            }
        };

        Ok(Self {
            bind,
            session_ttl: Duration::from_secs(ttl_secs),
            max_sessions,
            log_format,
            document_config: lookup("AVALIA_DOCUMENT_CONFIG").map(PathBuf::from),
        })
    }
}

/// Load document styles and letterhead. Without a file, or for fields the
/// file leaves out, the built-in defaults apply.
pub fn load_render_options(path: Option<&Path>) -> eyre::Result<RenderOptions> {
    let Some(path) = path else {
        return Ok(RenderOptions::default());
    };

    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read document config at {}: {e}", path.display()))?;
    let options: RenderOptions = serde_json::from_str(&contents)
        .map_err(|e| eyre::eyre!("invalid document config at {}: {e}", path.display()))?;

    tracing::info!(path = %path.display(), "document config loaded");
    Ok(options)
}
