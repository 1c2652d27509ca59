use std::env;

use anyhow::Context;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    /// Bearer key required by mutating routes. Unset disables writes.
    pub admin_api_key: Option<String>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let port = match env::var("PORT") {
            Ok(port) => port
                .parse::<u16>()
                .with_context(|| format!("PORT must be a port number, got '{}'", port))?,
            Err(_) => 8080,
        };

        Ok(Self {
            database_url: env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
            port,
            admin_api_key: env::var("ADMIN_API_KEY").ok().filter(|k| !k.is_empty()),
        })
    }

    pub fn writes_enabled(&self) -> bool {
        self.admin_api_key.is_some()
    }
}
