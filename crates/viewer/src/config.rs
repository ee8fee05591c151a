/// Viewer server configuration loaded from environment variables.
///
/// The revalidation secret stays `None` when unset; the revalidation
/// endpoint then answers 500 instead of silently skipping invalidation.
#[derive(Debug, Clone)]
pub struct ViewerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Base URL of the hosted data service.
    pub data_service_url: String,
    /// Service key sent to the data service, when configured.
    pub data_service_key: Option<String>,
    /// Shared secret the studio must present to revalidate a page.
    pub revalidate_secret: Option<String>,
}

impl ViewerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `DATA_SERVICE_URL`     | `http://localhost:54321`   |
    /// | `DATA_SERVICE_KEY`     | unset                      |
    /// | `REVALIDATE_SECRET`    | unset                      |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let data_service_url =
            std::env::var("DATA_SERVICE_URL").unwrap_or_else(|_| "http://localhost:54321".into());
        let data_service_key = std::env::var("DATA_SERVICE_KEY").ok();
        let revalidate_secret = std::env::var("REVALIDATE_SECRET").ok();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            data_service_url,
            data_service_key,
            revalidate_secret,
        }
    }
}
