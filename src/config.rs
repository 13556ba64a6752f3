use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "HealthGuard";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Port the HTTP server binds when `PORT` is not set.
pub const DEFAULT_PORT: u16 = 5000;

/// Default tracing filter when `RUST_LOG` is not set.
pub fn default_log_filter() -> String {
    format!("info,{}=debug", env!("CARGO_PKG_NAME"))
}

/// Get the application data directory
/// ~/HealthGuard/ on all platforms (user-visible, holds only the theme file)
pub fn app_data_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Cannot determine home directory");
    home.join("HealthGuard")
}

/// Path of the persisted theme preference (the single persisted key).
pub fn theme_path() -> PathBuf {
    app_data_dir().join("theme.json")
}

/// Directory of built frontend assets served at `/`.
/// Overridable via `HEALTHGUARD_STATIC_DIR` for packaged installs.
pub fn static_dir() -> PathBuf {
    std::env::var("HEALTHGUARD_STATIC_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("dist"))
}

/// Resolve the HTTP port from the environment.
pub fn server_port() -> u16 {
    std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_data_dir_under_home() {
        let dir = app_data_dir();
        let home = dirs::home_dir().unwrap();
        assert!(dir.starts_with(home));
        assert!(dir.ends_with("HealthGuard"));
    }

    #[test]
    fn theme_path_under_app_data() {
        let theme = theme_path();
        assert!(theme.starts_with(app_data_dir()));
        assert!(theme.ends_with("theme.json"));
    }

    #[test]
    fn app_name_is_healthguard() {
        assert_eq!(APP_NAME, "HealthGuard");
    }

    #[test]
    fn default_filter_includes_crate() {
        assert!(default_log_filter().contains("healthguard"));
    }
}
