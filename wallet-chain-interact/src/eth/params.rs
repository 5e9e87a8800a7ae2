use std::time::Duration;

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// How `EthChain` waits for mining. No timeout means wait forever.
#[derive(Debug, Clone, Copy)]
pub struct PollSetting {
    pub interval: Duration,
    pub timeout: Option<Duration>,
}

impl Default for PollSetting {
    fn default() -> Self {
        Self {
            interval: DEFAULT_POLL_INTERVAL,
            timeout: None,
        }
    }
}

impl PollSetting {
    pub fn expired(&self, waited: Duration) -> bool {
        self.timeout.is_some_and(|t| waited >= t)
    }
}
