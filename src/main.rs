#![recursion_limit = "4096"]

#[cfg(feature = "ssr")]
mod server {
    use axum::Router;
    use leptos::prelude::*;
    use leptos_axum::{LeptosRoutes, generate_route_list};
    use mylabeldesk::app::*;
    use mylabeldesk::core::config::{Config, ConfigError, LogFormat};
    use thiserror::Error;
    use tower_http::compression::{CompressionLayer, CompressionLevel};
    use tower_http::services::ServeDir;
    use tower_http::trace::TraceLayer;
    use tracing_subscriber::EnvFilter;

    #[derive(Debug, Error)]
    pub enum ServerError {
        #[error(transparent)]
        Config(#[from] ConfigError),

        #[error("failed to load leptos configuration: {0}")]
        Leptos(String),

        #[error("server I/O error: {0}")]
        Io(#[from] std::io::Error),
    }

    /// `RUST_LOG` wins over the configured level
    fn init_tracing(config: &Config) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
        let builder = tracing_subscriber::fmt().with_env_filter(filter);
        match config.log_format {
            LogFormat::Json => builder.json().init(),
            LogFormat::Pretty => builder.init(),
        }
    }

    async fn shutdown_signal() {
        let ctrl_c = async {
            if let Err(err) = tokio::signal::ctrl_c().await {
                tracing::warn!(error = %err, "failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
        };

        #[cfg(unix)]
        let terminate = async {
            match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
                Ok(mut signal) => {
                    signal.recv().await;
                }
                Err(err) => {
                    tracing::warn!(error = %err, "failed to listen for SIGTERM");
                    std::future::pending::<()>().await;
                }
            }
        };
        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        tokio::select! {
            _ = ctrl_c => {},
            _ = terminate => {},
        }
        tracing::info!("shutdown signal received");
    }

    pub async fn run() -> Result<(), ServerError> {
        // Load .env file (if exists)
        let _ = dotenvy::dotenv();

        let config = Config::from_env()?;
        init_tracing(&config);
        tracing::info!(
            log_level = %config.log_level,
            log_format = %config.log_format,
            compression = config.compression,
            "config loaded"
        );

        // Load configuration from Cargo.toml [package.metadata.leptos]
        // Can be overridden via LEPTOS_SITE_ADDR env var for Docker/K8s
        let conf = get_configuration(None).map_err(|err| ServerError::Leptos(err.to_string()))?;
        let leptos_options = conf.leptos_options;
        let addr = leptos_options.site_addr;

        let routes = generate_route_list(App);
        tracing::debug!(count = routes.len(), "generated route list");

        // Serves .br and .gz variants of the bundle when present
        let pkg_service = ServeDir::new(format!("{}/pkg", leptos_options.site_root))
            .precompressed_br()
            .precompressed_gzip();

        let app = Router::new()
            .nest_service("/pkg", pkg_service)
            .leptos_routes(&leptos_options, routes, {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            })
            .fallback(leptos_axum::file_and_error_handler(shell))
            .with_state(leptos_options)
            .layer(TraceLayer::new_for_http());

        let app = if config.compression {
            // Brotli first, gzip as the widely supported fallback
            app.layer(
                CompressionLayer::new()
                    .br(true)
                    .gzip(true)
                    .quality(CompressionLevel::Best),
            )
        } else {
            app
        };

        let listener = tokio::net::TcpListener::bind(&addr).await?;
        tracing::info!(%addr, "listening on http://{addr}");
        axum::serve(listener, app.into_make_service())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> std::process::ExitCode {
    match server::run().await {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(err) => {
            // The subscriber may not be up yet when config loading fails
            tracing::error!(error = %err, "server failed");
            eprintln!("error: {err}");
            std::process::ExitCode::FAILURE
        }
    }
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}
