use anyhow::anyhow;
use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub pricing: PricingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".into(), port: 3001, worker_threads: Some(4) }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Path of the JSON catalog file.
    #[serde(default = "default_data_file")]
    pub data_file: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { data_file: default_data_file() }
    }
}

fn default_data_file() -> String {
    "data/db.json".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct PricingConfig {
    /// Upstream price feed returning `[{currency, date, price}, ...]`.
    #[serde(default = "default_feed_url")]
    pub feed_url: String,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self { feed_url: default_feed_url() }
    }
}

fn default_feed_url() -> String {
    "https://interview.switcheo.com/prices.json".to_string()
}

pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let cfg: AppConfig = toml::from_str(&content)?;
    Ok(cfg)
}

impl AppConfig {
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default()?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        // 归一化 server
        self.server.normalize()?;
        // 归一化 storage/pricing（支持从环境变量填充）
        self.storage.normalize_from_env();
        self.storage.validate()?;
        self.pricing.normalize_from_env();
        self.pricing.validate()?;
        Ok(())
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = "127.0.0.1".to_string();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port 必须在 1..=65535 范围内"));
        }
        if let Some(w) = self.worker_threads {
            if w == 0 { self.worker_threads = Some(4); }
        } else {
            self.worker_threads = Some(4);
        }
        Ok(())
    }
}

impl StorageConfig {
    pub fn normalize_from_env(&mut self) {
        // 若 TOML 中未提供路径，则尝试从环境变量填充
        if self.data_file.trim().is_empty() {
            if let Ok(path) = std::env::var("CATALOG_DB_PATH") {
                self.data_file = path;
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.data_file.trim().is_empty() {
            return Err(anyhow!("storage.data_file 为空；请在 config.toml 或环境变量 CATALOG_DB_PATH 中提供"));
        }
        Ok(())
    }
}

impl PricingConfig {
    pub fn normalize_from_env(&mut self) {
        if let Ok(url) = std::env::var("PRICE_FEED_URL") {
            if !url.trim().is_empty() {
                self.feed_url = url;
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.feed_url.trim().is_empty() {
            return Err(anyhow!("pricing.feed_url 为空"));
        }
        let lower = self.feed_url.to_lowercase();
        if !(lower.starts_with("http://") || lower.starts_with("https://")) {
            return Err(anyhow!("pricing.feed_url 必须以 http:// 或 https:// 开头"));
        }
        Ok(())
    }
}
