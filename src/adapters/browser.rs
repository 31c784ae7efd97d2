use crate::core::{ImageUrl, Presenter};
use crate::utils::error::{PlanError, Result};
use async_trait::async_trait;

/// Opens every image in a tab of the platform's default browser.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserPresenter;

#[async_trait]
impl Presenter for BrowserPresenter {
    async fn present(&self, urls: &[ImageUrl]) -> Result<String> {
        for url in urls {
            tracing::debug!("Opening {}", url);
            webbrowser::open(url).map_err(|e| PlanError::BrowserError {
                url: url.clone(),
                message: e.to_string(),
            })?;
        }
        Ok(format!("Opened {} images in the browser", urls.len()))
    }
}
