use crate::core::extractor::extract_image_urls;
use crate::core::resolver::resolve_plan_id;
use crate::core::{ImageUrl, PhotoSource, Presenter};
use crate::utils::error::Result;

/// Runs resolve → fetch → extract → present for one plan.
pub struct PlanImagesEngine<S: PhotoSource> {
    source: S,
    site_root: String,
}

impl<S: PhotoSource> PlanImagesEngine<S> {
    pub fn new(source: S, site_root: impl Into<String>) -> Self {
        Self {
            source,
            site_root: site_root.into(),
        }
    }

    /// Resolves `input` to a plan and returns its image URLs.
    ///
    /// Nothing is cached, so every call fetches the photo XML again.
    pub async fn image_urls(&self, input: &str) -> Result<Vec<ImageUrl>> {
        let plan_id = resolve_plan_id(input)?;
        tracing::debug!("Found plan ID {}", plan_id);

        let photo_xml = self.source.fetch_photo_xml(&plan_id).await?;
        tracing::debug!("Photo XML is {} bytes", photo_xml.len());

        let urls = extract_image_urls(&photo_xml, &self.site_root)?;
        tracing::info!("Plan {} has {} images", plan_id, urls.len());
        Ok(urls)
    }

    pub async fn run(&self, input: &str, presenter: &dyn Presenter) -> Result<String> {
        let urls = self.image_urls(input).await?;
        presenter.present(&urls).await
    }
}
