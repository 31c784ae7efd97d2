pub mod engine;
pub mod extractor;
pub mod resolver;

pub use crate::domain::model::{ImageUrl, PlanId};
pub use crate::domain::ports::{ConfigProvider, PhotoSource, Presenter, Storage};
pub use crate::utils::error::Result;
