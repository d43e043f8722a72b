use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "HealthGuard";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// User-Agent for outbound requests (article search).
pub const USER_AGENT: &str = "HealthGuard/1.0 (https://healthguard.app)";

/// Get the application data directory
/// ~/HealthGuard/ on all platforms (user-visible, per design requirement)
pub fn app_data_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Cannot determine home directory");
    home.join("HealthGuard")
}

/// Path of the SQLite database file.
pub fn database_path() -> PathBuf {
    app_data_dir().join("healthguard.db")
}

/// Default tracing filter when RUST_LOG is unset.
pub fn default_log_filter() -> String {
    "healthguard=info".to_string()
}
