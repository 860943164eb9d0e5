use async_trait::async_trait;
use sqlx::{PgPool, postgres::PgPoolOptions};

use super::KeywordSource;

pub const DEFAULT_OPTION_NAME: &str = "disallowed_keys";

/// Reads the keyword setting from an `options(option_name, option_value)` table.
#[derive(Debug, Clone)]
pub struct PostgresKeywordSource {
    pool: PgPool,
    option_name: String,
}

impl PostgresKeywordSource {
    pub async fn connect(
        database_url: &str,
        option_name: impl Into<String>,
    ) -> anyhow::Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await?;
        Ok(Self::from_pool(pool, option_name))
    }

    pub fn from_pool(pool: PgPool, option_name: impl Into<String>) -> Self {
        Self {
            pool,
            option_name: option_name.into(),
        }
    }

    pub fn option_name(&self) -> &str {
        &self.option_name
    }
}

#[async_trait]
impl KeywordSource for PostgresKeywordSource {
    async fn raw_keywords(&self) -> anyhow::Result<Option<String>> {
        let value = sqlx::query_as::<_, (Option<String>,)>(
            "SELECT option_value
             FROM options
             WHERE option_name = $1
             LIMIT 1",
        )
        .bind(&self.option_name)
        .fetch_optional(&self.pool)
        .await?
        .and_then(|row| row.0);

        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use sqlx::postgres::PgPoolOptions;

    use super::{DEFAULT_OPTION_NAME, PostgresKeywordSource};

    #[tokio::test]
    async fn keeps_configured_option_name() {
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://formgate@localhost/formgate")
            .expect("lazy pool should build");
        let source = PostgresKeywordSource::from_pool(pool, DEFAULT_OPTION_NAME);
        assert_eq!(source.option_name(), "disallowed_keys");
    }
}
