// Adapters layer: concrete implementations for external systems (http, storage, presenters).

#[cfg(feature = "cli")]
pub mod browser;
pub mod download;
pub mod http;
pub mod list;
pub mod storage;

#[cfg(feature = "cli")]
pub use browser::BrowserPresenter;
pub use download::DownloadPresenter;
pub use http::HttpPhotoSource;
pub use list::ListPresenter;
pub use storage::LocalStorage;
