use crate::error::ScrapeError;
use reqwest::{Client, StatusCode};
use std::path::{Path, PathBuf};
use tokio::fs::{self, DirBuilder, OpenOptions};
use tokio::io::AsyncWriteExt;
use tracing::warn;

/// GETs a card page. Anything but 200 is `HttpNonOk`, which the driver
/// reads as the end of a set.
pub async fn fetch_card_page(client: &Client, url: &str) -> Result<Vec<u8>, ScrapeError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| ScrapeError::fetch(url, e))?;

    let status = response.status();
    if status != StatusCode::OK {
        return Err(ScrapeError::HttpNonOk {
            url: url.to_string(),
            status,
        });
    }

    let body = response
        .bytes()
        .await
        .map_err(|e| ScrapeError::ParseFailed(std::io::Error::new(std::io::ErrorKind::Other, e)))?;
    Ok(body.to_vec())
}

/// Streams `url` into `dir/filename` and returns the absolute path.
///
/// The response status is not checked: a 404 page is written like any
/// other body. It is logged so the bad file can be found later.
pub async fn download_image(
    client: &Client,
    url: &str,
    dir: &Path,
    filename: &str,
) -> Result<PathBuf, ScrapeError> {
    create_dir(dir).await.map_err(|e| ScrapeError::fetch(url, e))?;

    let path = dir.join(filename);
    let mut response = client
        .get(url)
        .send()
        .await
        .map_err(|e| ScrapeError::fetch(url, e))?;
    if !response.status().is_success() {
        warn!("{} returned {}, writing body anyway", url, response.status());
    }

    let mut file = create_file(&path)
        .await
        .map_err(|e| ScrapeError::fetch(url, e))?;
    while let Some(chunk) = response
        .chunk()
        .await
        .map_err(|e| ScrapeError::fetch(url, e))?
    {
        file.write_all(&chunk)
            .await
            .map_err(|e| ScrapeError::fetch(url, e))?;
    }
    file.flush().await.map_err(|e| ScrapeError::fetch(url, e))?;

    fs::canonicalize(&path)
        .await
        .map_err(|e| ScrapeError::fetch(url, e))
}

async fn create_dir(dir: &Path) -> std::io::Result<()> {
    let mut builder = DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    builder.mode(0o755);
    builder.create(dir).await
}

async fn create_file(path: &Path) -> std::io::Result<fs::File> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    options.mode(0o644);
    options.open(path).await
}
