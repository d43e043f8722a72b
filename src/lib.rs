pub mod articles;
pub mod config;
pub mod db;
pub mod engine;
pub mod i18n;
pub mod models;
pub mod reference;
pub mod service;

use tracing_subscriber::EnvFilter;

/// Initialize tracing for the host application. RUST_LOG overrides the
/// default filter.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);
}
