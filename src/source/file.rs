use std::{io::ErrorKind, path::PathBuf};

use async_trait::async_trait;

use super::KeywordSource;

/// Re-reads the file on every call so edits apply to the next submission.
#[derive(Debug, Clone)]
pub struct FileKeywordSource {
    path: PathBuf,
}

impl FileKeywordSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl KeywordSource for FileKeywordSource {
    async fn raw_keywords(&self) -> anyhow::Result<Option<String>> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => Ok(Some(raw)),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
            Err(error) => Err(anyhow::anyhow!(
                "failed to read keyword file {}: {error}",
                self.path.display()
            )),
        }
    }
}
