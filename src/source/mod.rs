mod file;
mod in_memory;
mod postgres;

use async_trait::async_trait;

pub use file::FileKeywordSource;
pub use in_memory::InMemoryKeywordSource;
pub use postgres::{DEFAULT_OPTION_NAME, PostgresKeywordSource};

/// Where the raw newline-delimited keyword setting lives. Read on every validation.
#[async_trait]
pub trait KeywordSource: Send + Sync {
    /// `None` means the setting does not exist, which never rejects a submission.
    async fn raw_keywords(&self) -> anyhow::Result<Option<String>>;
}
