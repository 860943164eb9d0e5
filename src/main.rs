use std::sync::Arc;

use formgate::{
    config::AppConfig,
    http::{self, AppState},
    source::{FileKeywordSource, InMemoryKeywordSource, KeywordSource, PostgresKeywordSource},
};
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let keywords = build_keyword_source(&config).await?;

    let app = http::router(AppState { keywords });
    let listener = TcpListener::bind(config.http_bind).await?;
    info!("formgate HTTP API listening on {}", config.http_bind);

    axum::serve(listener, app).await?;
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .compact()
        .init();
}

async fn build_keyword_source(config: &AppConfig) -> anyhow::Result<Arc<dyn KeywordSource>> {
    if let Some(database_url) = &config.database_url {
        let source = PostgresKeywordSource::connect(database_url, &config.keywords_option).await?;
        info!(option = %config.keywords_option, "reading disallowed keywords from Postgres");
        return Ok(Arc::new(source));
    }

    if let Some(path) = &config.keywords_file {
        info!(path = %path.display(), "reading disallowed keywords from file");
        return Ok(Arc::new(FileKeywordSource::new(path)));
    }

    if let Some(raw) = &config.keywords_inline {
        info!("using disallowed keywords from DISALLOWED_KEYS");
        return Ok(Arc::new(InMemoryKeywordSource::new(raw.clone())));
    }

    warn!("no disallowed keyword source configured; submissions pass unless a request supplies keywords");
    Ok(Arc::new(InMemoryKeywordSource::default()))
}
