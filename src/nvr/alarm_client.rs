use crate::errors::AppError;
use log::{debug, error, info};
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, CONNECTION, CONTENT_TYPE};
use std::time::Instant;

/// XML message understood by the virtual alarm webhook endpoint.
pub const VIRTUAL_ALARM_XML: &str = r#"
<?xml version="1.0" encoding="utf-8" ?>
<config version="2.0.0" xmlns="http://www.Sample.ipc.com/ver10">
	<action>
		<status>true</status>
	</action>
</config>
"#;

pub struct AlarmClient {
    http: Client,
}

impl AlarmClient {
    pub fn new() -> Self {
        AlarmClient {
            http: Client::new(),
        }
    }

    /// Sends one authenticated POST to `http://host:port<path>` and classifies the outcome.
    ///
    /// Only status 200 counts as success; any other status is returned as
    /// `AppError::HttpStatus` with the exact code and raw body. Faults while
    /// connecting, sending, or reading the response surface as
    /// `AppError::Transport`. The connection is owned by this one call and
    /// dropped on every exit path.
    pub fn send_api_post(
        &self,
        host: &str,
        port: u16,
        path: &str,
        username: &str,
        password: &str,
        body: &[u8],
    ) -> Result<String, AppError> {
        let request_start_time = Instant::now();

        // Ensure path starts with a slash if not empty
        let formatted_path = if !path.is_empty() && !path.starts_with('/') {
            format!("/{}", path)
        } else {
            path.to_string()
        };
        let url = format!("http://{}:{}{}", host, port, formatted_path);

        info!("📡 Sending virtual alarm POST to {}", url);
        debug!("  Payload is {} bytes, Basic Auth user '{}'.", body.len(), username);

        let response = self
            .http
            .post(&url)
            .header(CONTENT_TYPE, "application/xml")
            .header(ACCEPT, "application/xml")
            .header(CONNECTION, "close")
            .basic_auth(username, Some(password))
            .body(body.to_vec())
            .send()
            .map_err(|e| {
                error!("❌ HTTP request send failed for {}: {}", url, e);
                AppError::Transport(e.to_string())
            })?;

        let status = response.status().as_u16();
        debug!(
            "  Response status {} received in {:?}. Reading body...",
            status,
            request_start_time.elapsed()
        );

        let response_text = response.text().map_err(|e| {
            error!("❌ Failed to read response body from {}: {}", url, e);
            AppError::Transport(e.to_string())
        })?;

        if status == 200 {
            info!(
                "✅ NVR accepted the virtual alarm (status 200, {} byte response) in {:?}.",
                response_text.len(),
                request_start_time.elapsed()
            );
            Ok(response_text)
        } else {
            error!("❌ HTTP request failed with status: {}", status);
            Err(AppError::HttpStatus {
                status,
                body: response_text,
            })
        }
    }
}
