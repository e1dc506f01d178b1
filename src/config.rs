use std::env;
use std::time::Duration;

const DEFAULT_BIND: &str = "127.0.0.1:5001";
const DEFAULT_ORIGINS: &str = "http://localhost:5173";
const DEFAULT_USER_AGENT: &str = "ArtistWorker/0.1";
const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 20;

/// Runtime settings, resolved once at startup and handed to the server
/// builder rather than read ad hoc from the process environment.
#[derive(Debug, Clone)]
pub struct WorkerConfig {
    pub bind_addr: String,
    pub allowed_origins: Vec<String>,
    pub user_agent: String,
    pub fetch_timeout: Duration,
}

impl WorkerConfig {
    pub fn from_env() -> Self {
        let bind_addr = env::var("WORKER_BIND").unwrap_or_else(|_| DEFAULT_BIND.into());
        let allowed_origins = parse_origins(
            &env::var("ALLOWED_ORIGINS").unwrap_or_else(|_| DEFAULT_ORIGINS.into()),
        );
        let user_agent =
            env::var("WORKER_USER_AGENT").unwrap_or_else(|_| DEFAULT_USER_AGENT.into());
        let fetch_timeout = env::var("FETCH_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS));

        Self {
            bind_addr,
            allowed_origins,
            user_agent,
            fetch_timeout,
        }
    }
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND.into(),
            allowed_origins: parse_origins(DEFAULT_ORIGINS),
            user_agent: DEFAULT_USER_AGENT.into(),
            fetch_timeout: Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
        }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
