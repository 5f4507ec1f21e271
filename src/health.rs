use anyhow::Result;
use reqwest::Client;
use std::time::Duration;
use tokio::time::sleep;
use tracing::debug;

/// Polls the node's HTTP API until it answers, for tests that must wait for
/// a spawned node before driving it.
pub struct ApiProbe {
    client: Client,
    max_attempts: u32,
    retry_delay: Duration,
}

impl ApiProbe {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            max_attempts: 30,
            retry_delay: Duration::from_secs(2),
        }
    }

    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts;
        self
    }

    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    /// Resolves once the endpoint answers with a 2xx status; fails after the
    /// configured number of attempts.
    pub async fn wait_until_ready(&self, url: &str) -> Result<()> {
        for attempt in 1..=self.max_attempts {
            match self.client.get(url).send().await {
                Ok(response) if response.status().is_success() => {
                    debug!(url, attempt, "node API is ready");
                    return Ok(());
                }
                Ok(response) => {
                    debug!(url, status = %response.status(), attempt, "node API not ready yet");
                }
                Err(err) => {
                    debug!(url, error = %err, attempt, "node API unreachable");
                }
            }

            if attempt < self.max_attempts {
                sleep(self.retry_delay).await;
            }
        }

        anyhow::bail!(
            "node API at {url} did not become ready after {} attempts",
            self.max_attempts
        )
    }
}

impl Default for ApiProbe {
    fn default() -> Self {
        Self::new()
    }
}
