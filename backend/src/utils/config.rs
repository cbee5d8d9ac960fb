use std::net::SocketAddr;
use std::str::FromStr;

use thiserror::Error;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_PAGE_SIZE: i32 = 10;
pub const DEFAULT_SEED_COUNT: i32 = 1000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} has invalid value {value:?}: {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

/// Whether cached listings are dropped together with single items on writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagePolicy {
    EvictOnWrite,
    /// Listings survive writes until restart.
    KeepStale,
}

/// How service failures map onto HTTP status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorMode {
    /// Every failure is a 500.
    Observed,
    /// 404 for missing records, 409 for duplicates, 400 for missing numbers.
    Strict,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub page_size: i32,
    pub seed_count: i32,
    pub page_policy: PagePolicy,
    pub error_mode: ErrorMode,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            page_size: DEFAULT_PAGE_SIZE,
            seed_count: DEFAULT_SEED_COUNT,
            page_policy: PagePolicy::EvictOnWrite,
            error_mode: ErrorMode::Observed,
        }
    }
}

impl Config {
    pub fn init() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = parse_var(&lookup, "NEWS_BIND_ADDR", DEFAULT_BIND_ADDR)?;
        let page_size: i32 = parse_var(&lookup, "NEWS_PAGE_SIZE", "10")?;
        if page_size <= 0 {
            return Err(invalid("NEWS_PAGE_SIZE", page_size.to_string(), "must be positive"));
        }
        let seed_count: i32 = parse_var(&lookup, "NEWS_SEED_COUNT", "1000")?;
        if seed_count < 0 {
            return Err(invalid(
                "NEWS_SEED_COUNT",
                seed_count.to_string(),
                "must not be negative",
            ));
        }

        let page_policy = match lookup("NEWS_PAGE_CACHE")
            .unwrap_or_else(|| "evict".to_string())
            .to_lowercase()
            .as_str()
        {
            "evict" => PagePolicy::EvictOnWrite,
            "stale" => PagePolicy::KeepStale,
            other => {
                return Err(invalid(
                    "NEWS_PAGE_CACHE",
                    other.to_string(),
                    "expected evict or stale",
                ))
            }
        };

        let strict: bool = parse_var(&lookup, "NEWS_STRICT_ERRORS", "false")?;
        let error_mode = if strict {
            ErrorMode::Strict
        } else {
            ErrorMode::Observed
        };

        Ok(Config {
            bind_addr,
            page_size,
            seed_count,
            page_policy,
            error_mode,
        })
    }
}

fn parse_var<T, F>(lookup: &F, name: &'static str, default: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(name).unwrap_or_else(|| default.to_string());
    raw.trim()
        .parse()
        .map_err(|e: T::Err| invalid(name, raw.clone(), &e.to_string()))
}

fn invalid(name: &'static str, value: String, reason: &str) -> ConfigError {
    ConfigError::Invalid {
        name,
        value,
        reason: reason.to_string(),
    }
}
