use std::{env, net::SocketAddr, path::PathBuf};

use crate::source::DEFAULT_OPTION_NAME;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub http_bind: SocketAddr,
    pub database_url: Option<String>,
    pub keywords_option: String,
    pub keywords_file: Option<PathBuf>,
    pub keywords_inline: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let port = env::var("PORT").unwrap_or_else(|_| "8080".to_owned());
        let http_bind = env::var("HTTP_BIND").unwrap_or_else(|_| format!("0.0.0.0:{port}"));
        let http_bind = http_bind.parse()?;

        Ok(Self {
            http_bind,
            database_url: env_non_empty("DATABASE_URL"),
            keywords_option: env_non_empty("DISALLOWED_KEYS_OPTION")
                .unwrap_or_else(|| DEFAULT_OPTION_NAME.to_owned()),
            keywords_file: env_non_empty("DISALLOWED_KEYS_FILE").map(PathBuf::from),
            keywords_inline: env::var("DISALLOWED_KEYS").ok(),
        })
    }
}

fn env_non_empty(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|raw| raw.trim().to_owned())
        .filter(|raw| !raw.is_empty())
}
