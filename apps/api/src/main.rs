mod config;
mod db;
mod errors;
mod identity;
mod llm_client;
mod models;
mod resume;
mod revalidate;
mod routes;
mod state;
mod store;

#[cfg(test)]
mod stub_server;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::{create_pool, run_migrations};
use crate::identity::IntrospectionProvider;
use crate::llm_client::GeminiClient;
use crate::revalidate::{log_invalidations, Revalidator};
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::PgResumeStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_directives())),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL. One pool for the process lifetime, passed down explicitly.
    let db = create_pool(&config.database_url).await?;
    run_migrations(&db).await?;

    let identity = IntrospectionProvider::new(
        config.identity_introspection_url.clone(),
        config.identity_api_key.clone(),
    );
    info!("Identity provider: {}", config.identity_introspection_url);

    let llm = GeminiClient::new(config.gemini_api_key.clone(), config.gemini_api_base.clone());
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    let revalidator = Revalidator::new();
    tokio::spawn(log_invalidations(revalidator.subscribe()));

    let state = AppState {
        store: Arc::new(PgResumeStore::new(db)),
        identity: Arc::new(identity),
        llm: Arc::new(llm),
        revalidator,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins to the editor frontend

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
