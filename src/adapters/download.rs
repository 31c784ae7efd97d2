use crate::adapters::storage::LocalStorage;
use crate::core::{ImageUrl, Presenter, Storage};
use crate::utils::error::{PlanError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::path::PathBuf;
use url::Url;

const TEMP_DIR_PREFIX: &str = "plan-photos-";

/// Final path segment of `url`, used as the local file name.
///
/// Returns `None` when the URL does not parse or its path ends in `/`.
pub fn file_name_from_url(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let segment = parsed.path_segments()?.next_back()?;
    if segment.is_empty() || segment == "." || segment == ".." {
        return None;
    }
    Some(segment.to_string())
}

/// Downloads every image into one directory and reports its path.
///
/// Files are fetched one after another. A failed file is logged and skipped;
/// the rest are still written, and the call then fails with
/// [`PlanError::DownloadIncomplete`] naming the URLs that did not make it.
pub struct DownloadPresenter {
    client: Client,
    target_dir: Option<PathBuf>,
}

impl DownloadPresenter {
    /// Each `present` call downloads into a fresh temporary directory that is
    /// left in place afterwards.
    pub fn new(client: Client) -> Self {
        Self {
            client,
            target_dir: None,
        }
    }

    pub fn into_directory(client: Client, target_dir: impl Into<PathBuf>) -> Self {
        Self {
            client,
            target_dir: Some(target_dir.into()),
        }
    }

    fn prepare_directory(&self) -> Result<PathBuf> {
        match &self.target_dir {
            Some(dir) => {
                std::fs::create_dir_all(dir)?;
                Ok(dir.clone())
            }
            None => Ok(tempfile::Builder::new()
                .prefix(TEMP_DIR_PREFIX)
                .tempdir()?
                .keep()),
        }
    }

    async fn download_one(&self, storage: &LocalStorage, url: &str) -> Result<String> {
        let file_name = file_name_from_url(url)
            .ok_or_else(|| PlanError::fetch_failed(url, "URL has no file name"))?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| PlanError::fetch_failed(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PlanError::fetch_failed(url, format!("HTTP status {}", status)));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| PlanError::fetch_failed(url, e))?;

        storage.write_file(&file_name, &bytes).await?;
        Ok(file_name)
    }
}

#[async_trait]
impl Presenter for DownloadPresenter {
    async fn present(&self, urls: &[ImageUrl]) -> Result<String> {
        let dir = self.prepare_directory()?;
        let directory = dir.display().to_string();
        tracing::debug!("Downloading {} images into {}", urls.len(), directory);

        let storage = LocalStorage::new(dir);
        let mut failed = Vec::new();

        for url in urls {
            match self.download_one(&storage, url).await {
                Ok(file_name) => tracing::debug!("Saved {} as {}", url, file_name),
                Err(e) => {
                    tracing::warn!("Failed to download {}: {}", url, e);
                    failed.push(url.clone());
                }
            }
        }

        if failed.is_empty() {
            tracing::info!("Downloaded {} images", urls.len());
            Ok(directory)
        } else {
            Err(PlanError::DownloadIncomplete { directory, failed })
        }
    }
}
