use clap::Parser;
use mindchat_core::client::GeminiClient;
use mindchat_server::config::AppConfig;
use mindchat_server::http_server::{self, AppState};
use mindchat_server::lexicon::LexiconScorer;
use mindchat_server::session::{InMemorySessionStore, SessionStoreRef};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "mindchat-server", about = "Mental health support chatbot server")]
struct Args {
    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Gemini API key
    #[arg(short = 'k', long)]
    api_key: Option<String>,

    /// Gemini model to use
    #[arg(short = 'o', long)]
    model: Option<String>,

    /// HTTP server address
    #[arg(long)]
    http_addr: Option<SocketAddr>,

    /// Idle minutes before a session expires (0 disables expiry)
    #[arg(long)]
    session_ttl_minutes: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting mindchat server");

    // Parse command line args
    let args = Args::parse();

    // Load config from file or use defaults
    let mut config = match &args.config {
        Some(config_path) => AppConfig::load_from_file(config_path),
        None => AppConfig::load_from_default(),
    }
    .map_err(|e| {
        error!(error = %e, "Failed to load configuration");
        e
    })?;

    // Environment, then CLI args, override the file
    config.gemini.apply_env();
    if let Some(api_key) = args.api_key {
        config.gemini.api_key = Some(api_key);
    }
    if let Some(model) = args.model {
        config.gemini.model_name = Some(model);
    }
    if let Some(http_addr) = args.http_addr {
        config.http_addr = http_addr;
    }
    if let Some(ttl) = args.session_ttl_minutes {
        config.session_ttl_minutes = Some(ttl);
    }

    // Initialize Gemini client
    let gemini_client = match GeminiClient::new(config.gemini.clone()) {
        Ok(client) => {
            info!(model = %client.model_name(), "Initialized Gemini client");
            client
        }
        Err(e) => {
            error!(error = %e, "Failed to initialize Gemini client");
            return Err(anyhow::anyhow!("Failed to initialize Gemini client: {}", e));
        }
    };

    let store: SessionStoreRef = match config.session_ttl() {
        Some(ttl) => {
            info!(ttl_minutes = ttl.num_minutes(), "Sessions expire when idle");
            Arc::new(InMemorySessionStore::with_ttl(ttl))
        }
        None => Arc::new(InMemorySessionStore::new()),
    };

    let state = AppState::new(store.clone(), Arc::new(LexiconScorer), Arc::new(gemini_client))
        .map_err(|e| anyhow::anyhow!("Failed to load page templates: {}", e))?;

    // Sweep expired sessions and idle turn locks in the background
    let locks = state.locks();
    let period = Duration::from_secs(config.cleanup_interval_secs.max(1));
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        loop {
            interval.tick().await;
            match store.cleanup_expired_sessions().await {
                Ok(0) => {}
                Ok(removed) => debug!(removed, "Removed expired sessions"),
                Err(e) => warn!(error = %e, "Session cleanup failed"),
            }
            let pruned = locks.prune();
            if pruned > 0 {
                debug!(pruned, "Pruned idle turn locks");
            }
        }
    });

    tokio::select! {
        result = http_server::run_server(state, config.http_addr) => {
            if let Err(e) = &result {
                error!(error = %e, "HTTP server failed");
            }
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Received Ctrl-C");
        }
    }

    info!("mindchat server shutting down");
    Ok(())
}
