use akal_core::client::AKAL_BASE_URL;
use akal_core::ClientConfig;
use clap::Parser;

/// Process configuration for the Abfallkalender HTTP server
#[derive(Parser, Clone, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Server host
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Server port
    #[arg(long, env = "PORT", default_value = "7295")]
    pub port: u16,

    /// Calendar endpoint queried for each request
    #[arg(long, env = "AKAL_UPSTREAM_URL", default_value = AKAL_BASE_URL)]
    pub upstream_url: String,

    /// Upstream request timeout in seconds
    #[arg(long, env = "AKAL_UPSTREAM_TIMEOUT", default_value = "30")]
    pub upstream_timeout: u64,

    /// Use JSON formatting for tracing
    #[arg(long, env = "LOG_JSON", default_value = "false")]
    pub log_json: bool,

    /// Log filter directive
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub rust_log: String,
}

impl Config {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.upstream_url.clone(),
            timeout_secs: self.upstream_timeout,
            ..ClientConfig::default()
        }
    }
}
