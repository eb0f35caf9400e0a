use std::path::PathBuf;

use anyhow::{bail, Context, Result};

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub bind_addr: String,
    pub data_dir: PathBuf,
    pub extractor_base_url: String,
    pub extractor_api_key: String,
    pub extractor_model: String,
    pub task_file: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let bind_addr =
            std::env::var("INSIGHTS_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
        let data_dir = std::env::var("INSIGHTS_DATA_DIR")
            .unwrap_or_else(|_| "./insights".to_string())
            .into();

        let extractor_base_url = get("EXTRACTOR_BASE_URL")?;
        let extractor_api_key = get("EXTRACTOR_API_KEY")?;
        let extractor_model =
            std::env::var("EXTRACTOR_MODEL").unwrap_or_else(|_| "o1-preview".to_string());
        let task_file = get("EXTRACTOR_TASK_FILE")?.into();

        // Tiny sanity checks (fail fast, fail loud)
        if !extractor_base_url.starts_with("http://") && !extractor_base_url.starts_with("https://")
        {
            bail!("EXTRACTOR_BASE_URL must start with http:// or https://");
        }

        Ok(Self {
            bind_addr,
            data_dir,
            extractor_base_url,
            extractor_api_key,
            extractor_model,
            task_file,
        })
    }

    pub fn upload_dir(&self) -> PathBuf {
        self.data_dir.join("uploads")
    }

    pub fn results_file(&self) -> PathBuf {
        self.data_dir.join("processed_results.json")
    }
}

fn get(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Missing required env var: {key}"))
}
