/// Studio server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development except
/// the revalidation secret, which stays `None` when unset and surfaces as a
/// configuration error at the revalidation call site -- never a silent skip.
#[derive(Debug, Clone)]
pub struct StudioConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `4000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Base URL of the hosted data service.
    pub data_service_url: String,
    /// Service key sent to the data service, when configured.
    pub data_service_key: Option<String>,
    /// Base URL of the public viewer app (revalidation hop 2 target).
    pub public_app_url: String,
    /// Shared secret for the viewer's revalidation endpoint.
    pub revalidate_secret: Option<String>,
}

impl StudioConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `4000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `DATA_SERVICE_URL`     | `http://localhost:54321`   |
    /// | `DATA_SERVICE_KEY`     | unset                      |
    /// | `PUBLIC_APP_URL`       | `http://localhost:3000`    |
    /// | `REVALIDATE_SECRET`    | unset                      |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "4000".into())
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

        let public_app_url =
            std::env::var("PUBLIC_APP_URL").unwrap_or_else(|_| "http://localhost:3000".into());
        let revalidate_secret = std::env::var("REVALIDATE_SECRET").ok();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            data_service_url,
            data_service_key,
            public_app_url,
            revalidate_secret,
        }
    }
}
