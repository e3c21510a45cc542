/// Configuration for tracing initialization.
#[derive(Debug)]
pub struct TracingConfig {
    pub environment: String,
    pub json_format: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        let environment =
            std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());
        // JSON output in production unless LOG_FORMAT overrides it.
        let json_format = std::env::var("LOG_FORMAT")
            .map(|v| v.to_lowercase() == "json")
            .unwrap_or(environment == "production");
        Self {
            environment,
            json_format,
        }
    }
}
