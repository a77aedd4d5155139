use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use pay_now_core::{Outcome, PaymentRequest, PaymentTransport};

use crate::PayNowConfig;

/// Canned answers the mock draws from, uniformly.
pub const MOCK_RESPONSES: [(u16, &str); 4] = [
    (200, "Success"),
    (400, "Bad Request"),
    (401, "Unauthorized"),
    (500, "Server Error"),
];

/// Stand-in for a payment API: answers with a random canned status after a
/// fixed delay. Blocks the calling thread for the delay.
#[derive(Debug)]
pub struct MockTransport {
    latency: Duration,
    rng: Mutex<StdRng>,
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::with_config(&PayNowConfig::default())
    }
}

impl MockTransport {
    pub fn with_config(config: &PayNowConfig) -> Self {
        Self {
            latency: config.mock_latency(),
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    pub fn seeded(seed: u64, latency: Duration) -> Self {
        Self {
            latency,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    fn pick(&self) -> (u16, &'static str) {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        MOCK_RESPONSES[rng.random_range(0..MOCK_RESPONSES.len())]
    }
}

impl PaymentTransport for MockTransport {
    fn send(&self, request: &PaymentRequest) -> Outcome {
        let (status, message) = self.pick();
        tracing::debug!(
            status,
            to = %request.to,
            latency_ms = self.latency.as_millis() as u64,
            "mock payment api answering"
        );
        if !self.latency.is_zero() {
            std::thread::sleep(self.latency);
        }
        Outcome::from_status(status, message)
    }
}
