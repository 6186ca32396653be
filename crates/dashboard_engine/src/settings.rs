use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

#[derive(Debug, Clone)]
pub struct GatewaySettings {
    /// Origin every endpoint path is resolved against.
    pub base_url: String,
    pub connect_timeout: Duration,
    /// Whole-request timeout. Crawls run server-side inside the request, so
    /// this is generous.
    pub request_timeout: Duration,
}

impl Default for GatewaySettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(60),
        }
    }
}
