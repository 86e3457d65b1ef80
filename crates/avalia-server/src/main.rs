use tracing_subscriber::EnvFilter;

use avalia_server::config::{self, LogFormat, ServerConfig};
use avalia_server::session::SessionStore;
use avalia_server::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;

    let config = ServerConfig::from_env()?;
    init_tracing(config.log_format);

    let render = config::load_render_options(config.document_config.as_deref())?;
    let sessions = SessionStore::new(config.session_ttl, config.max_sessions);
    let state = AppState::new(sessions, render)?;

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    tracing::info!(
        addr = %config.bind,
        session_ttl_secs = config.session_ttl.as_secs(),
        max_sessions = config.max_sessions,
        "avalia listening"
    );

    axum::serve(listener, avalia_server::app(state)).await?;
    Ok(())
}

fn init_tracing(format: LogFormat) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match format {
        LogFormat::Json => tracing_subscriber::fmt().with_env_filter(filter).json().init(),
        LogFormat::Text => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
}
