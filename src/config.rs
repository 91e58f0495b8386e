use crate::utils::AppError;
use actix_web::http::Uri;
use std::env;

/// Runtime configuration, read from the environment (after `.env` is loaded).
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub app_name: String,
    pub host: String,
    pub port: u16,
    /// Public base URL of the backend, used for absolute links.
    pub api_url: String,
    pub frontend_origins: Vec<String>,
    pub show_built_with: bool,
    pub enable_sitemap: bool,
    pub event_channel_capacity: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_name: "dashboard".to_string(),
            host: "0.0.0.0".to_string(),
            port: 3000,
            api_url: "http://localhost:3000".to_string(),
            frontend_origins: vec![
                "http://localhost:3000".to_string(),
                "http://127.0.0.1:3000".to_string(),
            ],
            show_built_with: false,
            enable_sitemap: true,
            event_channel_capacity: 64,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup, so tests don't touch the process env.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| AppError::Config(format!("PORT={}: {}", raw, e)))?,
            None => defaults.port,
        };

        let event_channel_capacity = match lookup("EVENT_CHANNEL_CAPACITY") {
            Some(raw) => {
                let capacity = raw
                    .trim()
                    .parse::<usize>()
                    .map_err(|e| AppError::Config(format!("EVENT_CHANNEL_CAPACITY={}: {}", raw, e)))?;
                if capacity == 0 {
                    return Err(AppError::Config(
                        "EVENT_CHANNEL_CAPACITY must be greater than zero".to_string(),
                    ));
                }
                capacity
            }
            None => defaults.event_channel_capacity,
        };

        let frontend_origins = match lookup("FRONTEND_ORIGINS") {
            Some(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(validate_origin)
                .collect::<Result<Vec<_>, _>>()?,
            None => defaults.frontend_origins,
        };

        Ok(Self {
            app_name: lookup("APP_NAME").unwrap_or(defaults.app_name),
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            api_url: lookup("API_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_url),
            frontend_origins,
            show_built_with: parse_flag(&lookup, "SHOW_BUILT_WITH", defaults.show_built_with)?,
            enable_sitemap: parse_flag(&lookup, "ENABLE_SITEMAP", defaults.enable_sitemap)?,
            event_channel_capacity,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// CORS origins must be concrete `scheme://host[:port]` values; a wildcard
/// would make actix-cors fail when the app is built.
fn validate_origin(origin: &str) -> Result<String, AppError> {
    if origin == "*" {
        return Err(AppError::Config(
            "FRONTEND_ORIGINS does not accept the wildcard \"*\"".to_string(),
        ));
    }

    let uri = origin
        .parse::<Uri>()
        .map_err(|e| AppError::Config(format!("FRONTEND_ORIGINS entry {}: {}", origin, e)))?;

    let valid = matches!(uri.scheme_str(), Some("http") | Some("https"))
        && uri.host().is_some_and(|h| !h.is_empty())
        && matches!(uri.path(), "" | "/")
        && uri.query().is_none();
    if !valid {
        return Err(AppError::Config(format!(
            "FRONTEND_ORIGINS entry {} is not an http(s) origin",
            origin
        )));
    }

    Ok(origin.to_string())
}

fn parse_flag<F>(lookup: &F, key: &str, default: bool) -> Result<bool, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => match raw.trim().to_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(AppError::Config(format!("{}={} is not a boolean", key, raw))),
        },
    }
}
