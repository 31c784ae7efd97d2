use crate::core::{ImageUrl, Presenter};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::io::Write;
use std::sync::Mutex;

/// Writes one image URL per line.
pub struct ListPresenter<W: Write + Send> {
    out: Mutex<W>,
}

impl ListPresenter<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send> ListPresenter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl<W: Write + Send> Presenter for ListPresenter<W> {
    async fn present(&self, urls: &[ImageUrl]) -> Result<String> {
        let mut out = self.out.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        for url in urls {
            writeln!(out, "{}", url)?;
        }
        out.flush()?;
        Ok(format!("Listed {} image URLs", urls.len()))
    }
}
