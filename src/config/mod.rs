use anyhow::Context;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub mediawiki: MediaWikiConfig,
    pub frontend: FrontendConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaWikiConfig {
    /// Base URL of the MediaWiki query API.
    pub url: String,
    #[serde(default = "MediaWikiConfig::default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrontendConfig {
    /// Path to directory containing static frontend files.
    /// If None, no frontend is served.
    pub static_dir: Option<String>,
    /// Index document served for extensionless SPA routes.
    #[serde(default = "FrontendConfig::default_index")]
    pub index: String,
}

impl MediaWikiConfig {
    const fn default_timeout_secs() -> u64 {
        10
    }
}

impl FrontendConfig {
    fn default_index() -> String {
        "index.html".to_string()
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let host = std::env::var("GEOWIKI_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = std::env::var("GEOWIKI_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .context("GEOWIKI_PORT must be a valid port number")?;

        let mediawiki_url = std::env::var("GEOWIKI_MEDIAWIKI_URL")
            .unwrap_or_else(|_| "https://en.wikipedia.org/w/api.php".to_string());
        let timeout_secs = std::env::var("GEOWIKI_MEDIAWIKI_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or_else(MediaWikiConfig::default_timeout_secs);

        let static_dir = std::env::var("GEOWIKI_STATIC_DIR").ok();
        let index =
            std::env::var("GEOWIKI_STATIC_INDEX").unwrap_or_else(|_| FrontendConfig::default_index());

        Ok(Config {
            server: ServerConfig { host, port },
            mediawiki: MediaWikiConfig {
                url: mediawiki_url,
                timeout_secs,
            },
            frontend: FrontendConfig { static_dir, index },
        })
    }
}
