use std::str::FromStr;
use std::time::Duration;

use crate::error::ConfigError;

pub const DEFAULT_API_URL: &str = "https://schooldb.skillline.ru/api/schools";
pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const DEFAULT_PAGE_SIZE_OPTIONS: [u32; 4] = [10, 25, 50, 100];

/// What the user sees when the schools API cannot be reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Empty table and last-known pagination, nothing else.
    #[default]
    Silent,
    /// Same as `Silent`, plus a notice above the table.
    Banner,
}

impl FromStr for ErrorPolicy {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "silent" => Ok(Self::Silent),
            "banner" => Ok(Self::Banner),
            _ => Err(ConfigError::InvalidValue {
                var: "FETCH_ERROR_POLICY",
                value: value.to_string(),
            }),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// List endpoint of the remote schools API.
    pub api_url: String,
    pub host: String,
    pub port: u16,
    pub default_page_size: u32,
    /// Choices offered by the page-size selector, ascending.
    pub page_size_options: Vec<u32>,
    /// Directory with the prebuilt CSS/JS/image bundle, served under `/static`.
    pub assets_dir: String,
    /// `None` leaves the transport default in place.
    pub fetch_timeout: Option<Duration>,
    pub error_policy: ErrorPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            host: "0.0.0.0".to_string(),
            port: 3000,
            default_page_size: DEFAULT_PAGE_SIZE,
            page_size_options: DEFAULT_PAGE_SIZE_OPTIONS.to_vec(),
            assets_dir: "./static".to_string(),
            fetch_timeout: None,
            error_policy: ErrorPolicy::Silent,
        }
    }
}

impl AppConfig {
    /// Read the configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from any key lookup. Unparsable numbers fall
    /// back to their defaults; a bad URL or policy is an error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let api_url = lookup("SCHOOLS_API_URL").unwrap_or(defaults.api_url);
        reqwest::Url::parse(&api_url).map_err(|e| ConfigError::InvalidUrl {
            var: "SCHOOLS_API_URL",
            reason: e.to_string(),
        })?;

        let default_page_size = parse_or(&lookup, "DEFAULT_PAGE_SIZE", defaults.default_page_size)
            .max(1);

        let mut page_size_options: Vec<u32> = lookup("PAGE_SIZE_OPTIONS")
            .map(|raw| {
                raw.split(',')
                    .filter_map(|part| part.trim().parse().ok())
                    .filter(|size| *size > 0)
                    .collect()
            })
            .unwrap_or_default();
        if page_size_options.is_empty() {
            page_size_options = defaults.page_size_options;
        }
        page_size_options.push(default_page_size);
        page_size_options.sort_unstable();
        page_size_options.dedup();

        let fetch_timeout = lookup("FETCH_TIMEOUT_SECS")
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs);

        let error_policy = match lookup("FETCH_ERROR_POLICY") {
            Some(raw) => raw.parse()?,
            None => defaults.error_policy,
        };

        Ok(Self {
            api_url,
            host: lookup("HOST").unwrap_or(defaults.host),
            port: parse_or(&lookup, "PORT", defaults.port),
            default_page_size,
            page_size_options,
            assets_dir: lookup("ASSETS_DIR").unwrap_or(defaults.assets_dir),
            fetch_timeout,
            error_policy,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    lookup(key)
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
