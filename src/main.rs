use anyhow::{Context, Result};
use pogoda_cities::{CityCatalog, SuggestionEngine};
use pogoda_server::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize core
    pogoda_core::init()?;

    let (config, _validation) = pogoda_core::Config::load_validated()?;

    let catalog = match &config.cities.catalog_file {
        Some(path) => CityCatalog::from_json_file(path)
            .with_context(|| format!("Failed to load city catalog from {}", path.display()))?,
        None => CityCatalog::default_cities(),
    };
    tracing::info!("Serving suggestions for {} cities", catalog.len());

    let state = AppState::new(SuggestionEngine::new(catalog), config.ui.default_theme);
    let app = pogoda_server::router(state, &config.server.static_dir);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Pogoda listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
