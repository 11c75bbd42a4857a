use common::config::{parse_log_level, resolve_base_url};
use log::Level;
use web_sys::window;

/// Build-time override of the API base URL, e.g.
/// `ADMIN_API_BASE_URL=https://api.example.com trunk build`.
const BUILD_API_BASE_URL: Option<&str> = option_env!("ADMIN_API_BASE_URL");

const STORAGE_API_BASE_URL: &str = "admin_api_base_url";
const STORAGE_LOG_LEVEL: &str = "admin_log_level";

/// Global application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Backend origin without trailing slash (e.g. "http://localhost:5001")
    pub api_base_url: String,

    /// Default log level for the application
    pub log_level: Level,

    /// Enable debug mode
    pub debug_mode: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_base_url: resolve_base_url([BUILD_API_BASE_URL]),
            log_level: Level::Info,
            debug_mode: false,
        }
    }
}

impl AppSettings {
    /// Create settings from environment/window location
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        let Some(window) = window() else {
            return settings;
        };

        if let Ok(hostname) = window.location().hostname() {
            settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";

            // In development, use more verbose logging
            if settings.debug_mode {
                settings.log_level = Level::Debug;
            }
        }

        // localStorage beats the build-time value so a deployed bundle can be
        // pointed at another backend from the devtools console.
        if let Ok(Some(storage)) = window.local_storage() {
            let stored_url = storage.get_item(STORAGE_API_BASE_URL).ok().flatten();
            settings.api_base_url = resolve_base_url([stored_url.as_deref(), BUILD_API_BASE_URL]);

            if let Ok(Some(level)) = storage.get_item(STORAGE_LOG_LEVEL) {
                settings.log_level = parse_log_level(&level).unwrap_or(settings.log_level);
            }
        }

        settings
    }
}

// Global settings instance using thread_local
use std::cell::RefCell;

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::default());
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Initialize settings (call this at app startup)
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}
