use serde::Deserialize;

fn default_http_port() -> u16 {
    80
}

#[derive(Debug, Deserialize, Clone)]
pub struct NvrConfig {
    pub name: String,
    pub host: String,
    #[serde(default = "default_http_port")]
    pub port: u16,
    pub path: String, // e.g. /TriggerVirtualAlarm/17
    pub username: String,
    pub password: Option<String>,
}
