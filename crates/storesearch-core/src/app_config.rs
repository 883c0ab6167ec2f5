#[derive(Clone)]
pub struct AppConfig {
    pub google_api_key: String,
    pub log_level: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub places_base_url: String,
    pub page_token_delay_ms: u64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("google_api_key", &"[redacted]")
            .field("log_level", &self.log_level)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("places_base_url", &self.places_base_url)
            .field("page_token_delay_ms", &self.page_token_delay_ms)
            .finish()
    }
}
