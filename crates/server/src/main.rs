//! Course search server.
//!
//! Seeds the course collection once, then serves `/api/search`.

use std::sync::Arc;

use clap::Parser;
use course_persistence::backends::memory::InMemoryStore;
use course_persistence::core::{BackendKind, DocumentStore};
use course_persistence::ingestion::{IngestionGuard, IngestionOutcome, SeedSource};
use course_persistence::types::validate_schema;
use course_rest::{ServerConfig, create_app_with_config, init_logging};
use tracing::info;

/// Runs the ingestion step unless it is disabled.
async fn ingest<S>(store: Arc<S>, config: &ServerConfig) -> anyhow::Result<()>
where
    S: DocumentStore,
{
    if config.skip_ingestion {
        info!("Ingestion disabled, serving existing data");
        return Ok(());
    }

    let source = match &config.seed_file {
        Some(path) => SeedSource::File(path.clone()),
        None => SeedSource::Embedded,
    };
    info!(collection = %config.collection, source = %source.origin(), "Running ingestion");

    let outcome = IngestionGuard::new(store, config.collection.clone())
        .with_source(source)
        .run()
        .await?;

    if let IngestionOutcome::Seeded { count } = outcome {
        info!(count, "Ingestion complete");
    }
    Ok(())
}

/// Starts the Axum HTTP server.
async fn serve(app: axum::Router, config: &ServerConfig) -> anyhow::Result<()> {
    let addr = config.socket_addr();
    info!(address = %addr, "Server listening");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

/// Seeds `store` and serves it.
async fn start<S>(store: S, config: ServerConfig) -> anyhow::Result<()>
where
    S: DocumentStore + 'static,
{
    let store = Arc::new(store);
    ingest(Arc::clone(&store), &config).await?;
    let app = create_app_with_config(store, config.clone());
    serve(app, &config).await
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();
    init_logging(&config.log_level);

    if let Err(errors) = config.validate() {
        for error in &errors {
            eprintln!("Configuration error: {}", error);
        }
        std::process::exit(1);
    }

    validate_schema().map_err(|e| anyhow::anyhow!("Course schema mismatch: {}", e))?;

    info!(
        port = config.port,
        host = %config.host,
        storage_backend = %config.storage_backend,
        collection = %config.collection,
        "Starting course search server"
    );

    match config.storage_backend {
        BackendKind::Memory => start(InMemoryStore::new(), config).await,
        BackendKind::Elasticsearch => start_elasticsearch(config).await,
    }
}

/// Starts the server against Elasticsearch.
#[cfg(feature = "elasticsearch")]
async fn start_elasticsearch(config: ServerConfig) -> anyhow::Result<()> {
    use course_persistence::backends::elasticsearch::{
        ElasticsearchAuth, ElasticsearchBackend, ElasticsearchConfig,
    };

    let es_nodes: Vec<String> = config
        .es_nodes
        .iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    let es_auth = match (&config.es_username, &config.es_password) {
        (Some(username), Some(password)) => Some(ElasticsearchAuth::Basic {
            username: username.clone(),
            password: password.clone(),
        }),
        _ => None,
    };

    let es_config = ElasticsearchConfig {
        nodes: es_nodes,
        index_prefix: config.es_index_prefix.clone(),
        request_timeout_ms: config.request_timeout * 1000,
        auth: es_auth,
        ..Default::default()
    };

    let backend = ElasticsearchBackend::new(es_config)?;
    start(backend, config).await
}

/// Fallback when the elasticsearch feature is not enabled.
#[cfg(not(feature = "elasticsearch"))]
async fn start_elasticsearch(_config: ServerConfig) -> anyhow::Result<()> {
    anyhow::bail!(
        "The elasticsearch backend requires the 'elasticsearch' feature. \
         Build with: cargo build -p course-search --features elasticsearch, \
         or set COURSE_STORAGE_BACKEND=memory"
    )
}
