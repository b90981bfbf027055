use crate::error::ScrapeError;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const SETS: [u32; 3] = [1, 2, 3];
pub const OUTPUT_DIR: &str = "output";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub base_url: String,
    pub output_dir: PathBuf,
    pub request_timeout: Option<Duration>,
}

/// Loads `.env` from the working directory, then reads the environment.
///
/// A missing or empty `BASE_URL` is `EnvLoadFailed`; it is never used as
/// an empty prefix.
pub fn load() -> Result<Config, ScrapeError> {
    dotenv::dotenv().map_err(|e| ScrapeError::EnvLoadFailed(format!("loading .env file: {}", e)))?;
    from_lookup(|name| env::var(name).ok())
}

fn from_lookup<F>(lookup: F) -> Result<Config, ScrapeError>
where
    F: Fn(&str) -> Option<String>,
{
    let base_url = lookup("BASE_URL")
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ScrapeError::EnvLoadFailed("BASE_URL must be set".to_string()))?;

    let request_timeout = match lookup("REQUEST_TIMEOUT_SECS") {
        None => None,
        Some(raw) => match raw.trim().parse::<u64>() {
            Ok(secs) if secs > 0 => Some(Duration::from_secs(secs)),
            _ => {
                return Err(ScrapeError::EnvLoadFailed(format!(
                    "REQUEST_TIMEOUT_SECS must be a positive integer, got {:?}",
                    raw
                )))
            }
        },
    };

    Ok(Config {
        base_url,
        output_dir: PathBuf::from(OUTPUT_DIR),
        request_timeout,
    })
}
