use async_trait::async_trait;
use tokio::sync::RwLock;

use super::KeywordSource;

#[derive(Debug, Default)]
pub struct InMemoryKeywordSource {
    raw: RwLock<Option<String>>,
}

impl InMemoryKeywordSource {
    pub fn new(raw: impl Into<String>) -> Self {
        Self {
            raw: RwLock::new(Some(raw.into())),
        }
    }

    pub async fn set(&self, raw: Option<String>) {
        *self.raw.write().await = raw;
    }
}

#[async_trait]
impl KeywordSource for InMemoryKeywordSource {
    async fn raw_keywords(&self) -> anyhow::Result<Option<String>> {
        Ok(self.raw.read().await.clone())
    }
}
