use crate::domain::model::{ImageUrl, PlanId};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn site_root(&self) -> &str;
    fn photo_xml_url(&self, plan_id: &PlanId) -> String;
    fn request_timeout(&self) -> Duration;
    fn user_agent(&self) -> &str;
}

/// Where the photo XML for a plan comes from.
pub trait PhotoSource: Send + Sync {
    fn fetch_photo_xml(
        &self,
        plan_id: &PlanId,
    ) -> impl std::future::Future<Output = Result<String>> + Send;
}

/// Final consumer of the resolved image URLs. Returns a one-line summary.
#[async_trait]
pub trait Presenter: Send + Sync {
    async fn present(&self, urls: &[ImageUrl]) -> Result<String>;
}
