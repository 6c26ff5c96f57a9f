//! notetag API server.

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use notetag_api::{router, ApiConfig, AppState, TagGenerator};
use notetag_core::NoteRepository;
use notetag_db::{log_pool_metrics, Database, MemoryNoteRepository, PoolConfig};
use notetag_inference::{HuggingFaceBackend, HuggingFaceConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing with configurable output
    //
    // Environment variables:
    //   LOG_FORMAT  - "json" or "text" (default: "text")
    //   LOG_FILE    - path to log file (optional, enables file logging)
    //   LOG_ANSI    - "true"/"false" override ANSI colors (auto-detected by default)
    //   RUST_LOG    - standard env filter (default: "notetag_api=debug,tower_http=debug")
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let log_file = std::env::var("LOG_FILE").ok();
    let log_ansi = std::env::var("LOG_ANSI")
        .ok()
        .map(|v| v == "true" || v == "1");

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "notetag_api=debug,tower_http=debug".into());

    let registry = tracing_subscriber::registry().with(env_filter);

    // Daily-rotated file output when LOG_FILE is set
    let _file_guard = if let Some(ref path) = log_file {
        let path = std::path::Path::new(path);
        let file_dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(std::path::Path::new("."));
        let file_name = path
            .file_name()
            .and_then(|f| f.to_str())
            .unwrap_or("notetag-api.log");
        let (non_blocking, guard) =
            tracing_appender::non_blocking(tracing_appender::rolling::daily(file_dir, file_name));

        if log_format == "json" {
            registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(non_blocking),
                )
                .init();
        } else {
            registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(non_blocking)
                        .with_ansi(log_ansi.unwrap_or(false)),
                )
                .init();
        }
        Some(guard)
    } else {
        // Console-only output
        if log_format == "json" {
            registry
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        } else {
            let mut layer = tracing_subscriber::fmt::layer();
            if let Some(ansi) = log_ansi {
                layer = layer.with_ansi(ansi);
            }
            registry.with(layer).init();
        }
        None
    };

    info!(
        log_format = %log_format,
        log_file = log_file.as_deref().unwrap_or("(stdout)"),
        "Logging initialized"
    );

    let config = ApiConfig::from_env();

    // Classification gateway
    let hf_config = HuggingFaceConfig::from_env();
    if !hf_config.has_api_key() {
        error!(
            subsystem = "inference",
            component = "huggingface",
            "HF_API_KEY is missing in environment variables; tag generation will fail"
        );
    }
    let tagger = TagGenerator::new(Arc::new(HuggingFaceBackend::new(hf_config)?));

    // Note store
    let notes: Arc<dyn NoteRepository> = match config.database_url.as_deref() {
        Some(url) => {
            let db = Database::connect_with_config(url, PoolConfig::from_env()).await?;
            db.migrate().await?;
            log_pool_metrics(db.pool());
            info!(subsystem = "db", "Database is connected");
            Arc::new(db.notes.clone())
        }
        None => {
            warn!(
                subsystem = "db",
                "DATABASE_URL is not set; notes are kept in memory and lost on restart"
            );
            Arc::new(MemoryNoteRepository::new())
        }
    };

    let addr: SocketAddr = config.bind_address().parse()?;
    let app = router(AppState::new(notes, tagger, config));

    info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
