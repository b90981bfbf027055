use reqwest::StatusCode;
use std::error::Error;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

type Source = Box<dyn Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("parse html: {0}")]
    ParseFailed(#[source] io::Error),

    #[error("h1 not found")]
    HeadingMissing,

    #[error("metadata not found in title: {0}")]
    MetadataMissing(String),

    #[error("image src not found")]
    ImageMissing,

    #[error("fetch {url}: {source}")]
    FetchFailed {
        url: String,
        #[source]
        source: Source,
    },

    #[error("write {}: {}", .path.display(), .source)]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error loading environment: {0}")]
    EnvLoadFailed(String),

    #[error("{url} returned {status}")]
    HttpNonOk { url: String, status: StatusCode },
}

impl ScrapeError {
    pub fn fetch(url: &str, source: impl Into<Source>) -> ScrapeError {
        ScrapeError::FetchFailed {
            url: url.to_string(),
            source: source.into(),
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: io::Error) -> ScrapeError {
        ScrapeError::WriteFailed {
            path: path.into(),
            source,
        }
    }
}
