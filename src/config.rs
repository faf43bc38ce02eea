use std::time::Duration;
use clap::Parser;

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Parser, Clone, Debug)]
pub struct Config {
    #[clap(env, long, default_value = "development")]
    pub environment: String,

    /// Base url of the restaurant backend serving `/get-detail`, `/get-review`, ...
    #[clap(env, long, default_value = "http://127.0.0.1:8080")]
    pub backend_url: String,

    /// Restaurant shown when the page url does not name one
    #[clap(env, long, default_value = "")]
    pub restaurant_name: String,

    #[clap(env, long, default_value_t = 3000)]
    pub port: u16,

    /// Comma separated list of allowed CORS origins
    #[clap(env, long, default_value = "http://localhost:3000")]
    pub origin_urls: String,

    /// Per request timeout against the backend, 0 waits forever
    #[clap(env, long, default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS)]
    pub request_timeout_secs: u64,
}

impl Config {
    pub fn request_timeout(&self) -> Option<Duration> {
        (self.request_timeout_secs > 0).then(|| Duration::from_secs(self.request_timeout_secs))
    }

    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.backend_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }
}
