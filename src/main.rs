mod config;
mod routes;

use config::{Config, ConfigError};

#[derive(Debug, thiserror::Error)]
enum ServeError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to bind port {port}: {source}")]
    Bind {
        port: u16,
        #[source]
        source: std::io::Error,
    },
    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), ServeError> {
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;
    if !config.website_dir.is_dir() {
        tracing::warn!(dir = %config.website_dir.display(), "website directory not found");
    }
    if !config.pkg_dir.is_dir() {
        tracing::warn!(
            dir = %config.pkg_dir.display(),
            "wasm bundle not found; build it with `wasm-pack build page --target web --out-dir ../website/pkg`"
        );
    }

    let app = routes::app(&config);
    let port = config.port;
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .map_err(|source| ServeError::Bind { port, source })?;

    tracing::info!(%port, website = %config.website_dir.display(), "folio listening");
    axum::serve(listener, app).await.map_err(ServeError::Serve)
}
