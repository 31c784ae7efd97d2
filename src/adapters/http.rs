use crate::core::{ConfigProvider, PhotoSource, PlanId};
use crate::utils::error::{PlanError, Result};
use reqwest::Client;

/// Builds the HTTP client shared by the XML fetch and image downloads.
pub fn build_client<C: ConfigProvider>(config: &C) -> Result<Client> {
    Client::builder()
        .timeout(config.request_timeout())
        .user_agent(config.user_agent())
        .build()
        .map_err(|e| PlanError::ConfigValidationError {
            field: "http".to_string(),
            message: format!("Failed to build HTTP client: {}", e),
        })
}

pub struct HttpPhotoSource<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> HttpPhotoSource<C> {
    pub fn new(config: C) -> Result<Self> {
        let client = build_client(&config)?;
        Ok(Self { config, client })
    }

    pub fn client(&self) -> &Client {
        &self.client
    }
}

impl<C: ConfigProvider> PhotoSource for HttpPhotoSource<C> {
    async fn fetch_photo_xml(&self, plan_id: &PlanId) -> Result<String> {
        let url = self.config.photo_xml_url(plan_id);
        tracing::debug!("Downloading photo XML from {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| PlanError::fetch_failed(&url, e))?;

        let status = response.status();
        tracing::debug!("Photo XML response status: {}", status);
        if !status.is_success() {
            return Err(PlanError::fetch_failed(&url, format!("HTTP status {}", status)));
        }

        // 一律以 UTF-8 解碼，忽略 Content-Type 的 charset
        let bytes = response
            .bytes()
            .await
            .map_err(|e| PlanError::fetch_failed(&url, e))?;
        String::from_utf8(bytes.to_vec())
            .map_err(|e| PlanError::fetch_failed(&url, format!("body is not valid UTF-8: {}", e)))
    }
}
