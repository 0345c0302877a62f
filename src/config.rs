use crate::engine::DEFAULT_PAGE_SIZE;
use anyhow::{Context, Result};

pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_url: String,
    pub page_size: usize,
    pub http_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            http_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Read configuration from `RENTAL_*` environment variables, falling back
    /// to defaults for anything unset.
    pub fn from_env() -> Result<Config> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let api_url = lookup("RENTAL_API_URL").unwrap_or(defaults.api_url);

        let page_size = match lookup("RENTAL_PAGE_SIZE") {
            Some(raw) => {
                let size = raw
                    .trim()
                    .parse::<usize>()
                    .with_context(|| format!("RENTAL_PAGE_SIZE must be a number, got {:?}", raw))?;
                if size == 0 {
                    anyhow::bail!("RENTAL_PAGE_SIZE must be at least 1");
                }
                size
            }
            None => defaults.page_size,
        };

        let http_timeout_secs = match lookup("RENTAL_HTTP_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse::<u64>().with_context(|| {
                format!("RENTAL_HTTP_TIMEOUT_SECS must be a number, got {:?}", raw)
            })?,
            None => defaults.http_timeout_secs,
        };

        Ok(Config {
            api_url,
            page_size,
            http_timeout_secs,
        })
    }
}
