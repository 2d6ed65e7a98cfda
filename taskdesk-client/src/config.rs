/// Configuration management for the client state layer
///
/// Loads configuration from environment variables into a type-safe struct.
///
/// # Environment Variables
///
/// - `TASKDESK_DATA_DIR`: Directory for file-backed storage (default: `.taskdesk`)
/// - `TASKDESK_LATENCY_MS`: Simulated backend latency in milliseconds (default: 1000)
/// - `RUST_LOG`: Log level (default: info)
///
/// # Example
///
/// ```no_run
/// use taskdesk_client::config::ClientConfig;
///
/// # fn example() -> anyhow::Result<()> {
/// let config = ClientConfig::from_env()?;
/// println!("Data directory: {}", config.data_dir.display());
/// # Ok(())
/// # }
/// ```
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Directory for file-backed storage
    pub data_dir: PathBuf,

    /// Simulated backend latency for mock-async operations
    pub latency_ms: u64,
}

impl ClientConfig {
    /// Loads configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error when a variable is present but unparseable.
    pub fn from_env() -> anyhow::Result<Self> {
        // Load .env file if present (for development)
        dotenvy::dotenv().ok();

        let data_dir = env::var("TASKDESK_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(".taskdesk"));

        let latency_ms = env::var("TASKDESK_LATENCY_MS")
            .unwrap_or_else(|_| "1000".to_string())
            .parse::<u64>()
            .map_err(|e| anyhow::anyhow!("TASKDESK_LATENCY_MS must be an integer: {e}"))?;

        Ok(ClientConfig {
            data_dir,
            latency_ms,
        })
    }

    /// The simulated latency as a `Duration`
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            data_dir: PathBuf::from(".taskdesk"),
            latency_ms: 1000,
        }
    }
}
