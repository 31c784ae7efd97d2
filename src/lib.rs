pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, OutputMode};

pub use adapters::{DownloadPresenter, HttpPhotoSource, ListPresenter, LocalStorage};
pub use config::site_config::SiteConfig;
pub use crate::core::{
    engine::PlanImagesEngine, extractor::extract_image_urls, resolver::resolve_plan_id,
};
pub use domain::model::{ImageUrl, PlanId};
pub use utils::error::{PlanError, Result};
