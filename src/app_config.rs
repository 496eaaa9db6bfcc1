use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct ApplicationConfig {
    pub log_level: Option<String>, // Making it optional to potentially use CLI flag as primary
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        ApplicationConfig {
            log_level: Some("info".to_string()),
        }
    }
}
