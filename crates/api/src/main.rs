use anyhow::Context;

use productapi_api::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    productapi_observability::init();

    let config = AppConfig::from_env()?;
    let app = productapi_api::app::build_app(&config).await?;

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!(
        addr = %listener.local_addr()?,
        strict_docs_paths = config.public_routes.is_strict(),
        "listening"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
