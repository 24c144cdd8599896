use anyhow::Context;
use tracing::info;

use recipebook_catalog::config::CatalogConfig;
use recipebook_catalog::router::build_router;
use recipebook_catalog::state::AppState;
use recipebook_core::tracing::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = CatalogConfig::from_env();
    let router = build_router(AppState::new(&config.site_root));

    let http_addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&http_addr)
        .await
        .with_context(|| format!("failed to bind {http_addr}"))?;

    info!(site_root = %config.site_root.display(), "catalog listening on {http_addr}");
    axum::serve(listener, router).await.context("server error")
}
