//! Fallback file serving for a fixed whitelist of paths.
//!
//! Files are read from disk on every request; nothing is cached.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::config::StaticFilesConfig;
use crate::http::mime;
use crate::http::response::{Response, ResponseBuilder, StatusCode};

const TIME_PLACEHOLDER: &str = "{time}";

#[derive(Debug, Clone)]
pub struct StaticFiles {
    root: PathBuf,
    whitelist: HashSet<String>,
    templated: HashSet<String>,
}

impl StaticFiles {
    pub fn new(
        root: impl Into<PathBuf>,
        whitelist: impl IntoIterator<Item = impl Into<String>>,
        templated: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            root: root.into(),
            whitelist: whitelist.into_iter().map(Into::into).collect(),
            templated: templated.into_iter().map(Into::into).collect(),
        }
    }

    pub fn from_config(cfg: &StaticFilesConfig) -> Self {
        Self::new(
            cfg.root.clone(),
            cfg.whitelist.iter().cloned(),
            cfg.templated.iter().cloned(),
        )
    }

    pub fn is_whitelisted(&self, path: &str) -> bool {
        self.whitelist.contains(path)
    }

    /// Location on disk for a request path (`/index.html` -> `<root>/index.html`).
    pub fn file_path(&self, path: &str) -> PathBuf {
        self.root.join(path.trim_start_matches('/'))
    }

    pub async fn exists(&self, path: &str) -> bool {
        tokio::fs::metadata(self.file_path(path))
            .await
            .map(|m| m.is_file())
            .unwrap_or(false)
    }

    pub async fn read(&self, path: &str) -> std::io::Result<Vec<u8>> {
        tokio::fs::read(self.file_path(path)).await
    }

    pub fn content_type(&self, path: &str) -> &'static str {
        mime::content_type(Path::new(path))
    }

    /// Builds the 200 response for a whitelisted path.
    ///
    /// Templated paths get every `{time}` replaced with the current local
    /// time before the length is taken. A template that is not valid UTF-8 is
    /// an `InvalidData` error.
    pub async fn respond(&self, path: &str) -> std::io::Result<Response> {
        let mut content = self.read(path).await?;

        if self.templated.contains(path) {
            let now = chrono::Local::now()
                .naive_local()
                .format("%Y-%m-%dT%H:%M:%S%.6f")
                .to_string();
            let template = String::from_utf8(content)
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
            content = template.replace(TIME_PLACEHOLDER, &now).into_bytes();
        }

        tracing::debug!(
            path = %path,
            bytes = content.len(),
            templated = self.templated.contains(path),
            "Serving static file"
        );

        Ok(ResponseBuilder::new(StatusCode::Ok)
            .header("Content-Type", self.content_type(path))
            .body(content)
            .build())
    }
}
