use crate::app_config::ApplicationConfig;
use crate::nvr_config::NvrConfig;
use anyhow::{bail, Context, Result};
use log::{debug, info};
use serde::Deserialize;
use std::fs;
use std::time::Instant;

#[derive(Debug, Deserialize, Clone)]
pub struct MasterConfig {
    #[serde(rename = "application", default)]
    pub app_settings: ApplicationConfig,
    pub nvr: NvrConfig,
}

pub fn load_config(path: &str) -> Result<MasterConfig> {
    debug!("📄 Attempting to load config from: {}", path);
    let start_time = Instant::now();

    let config_str = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file '{}'. 📖", path))?;
    debug!("Read config file in {:?}", start_time.elapsed());

    let parse_start_time = Instant::now();
    let config: MasterConfig = serde_yaml::from_str(&config_str)
        .with_context(|| format!("Failed to parse YAML configuration from '{}'. 💔", path))?;
    debug!("Parsed YAML in {:?}", parse_start_time.elapsed());

    let validate_start_time = Instant::now();
    validate_master_config(&config).with_context(|| "Master configuration validation failed 👎")?;
    debug!("Validated master config in {:?}", validate_start_time.elapsed());

    info!("✅ Successfully loaded and validated configuration from '{}' in {:?}", path, start_time.elapsed());
    Ok(config)
}

fn validate_master_config(config: &MasterConfig) -> Result<()> {
    debug!("🕵️ Validating master configuration...");
    let validation_start_time = Instant::now();

    let nvr = &config.nvr;
    if nvr.name.is_empty() {
        bail!("❌ NVR name cannot be empty.");
    }
    if nvr.host.is_empty() {
        bail!("❌ Host for NVR '{}' cannot be empty.", nvr.name);
    }
    if nvr.port == 0 {
        bail!("❌ Invalid HTTP port 0 for NVR '{}'.", nvr.name);
    }
    if nvr.path.is_empty() {
        bail!("❌ Webhook endpoint path for NVR '{}' cannot be empty.", nvr.name);
    }
    if nvr.username.is_empty() {
        bail!("❌ Username for NVR '{}' cannot be empty.", nvr.name);
    }

    info!("👍 Master configuration validated successfully in {:?}.", validation_start_time.elapsed());
    Ok(())
}
