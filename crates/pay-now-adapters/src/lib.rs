pub mod config;
pub mod http;
pub mod mock;
pub mod navigator;
pub mod scripted;

use std::sync::Arc;

use pay_now_core::{PaymentTransport, PortError};

pub use config::PayNowConfig;
pub use http::HttpTransport;
pub use mock::{MockTransport, MOCK_RESPONSES};
pub use navigator::RecordingNavigator;
pub use scripted::ScriptedTransport;

pub type SharedTransport = Arc<dyn PaymentTransport + Send + Sync>;

/// Picks the HTTP transport when an endpoint is configured, the mock otherwise.
pub fn transport_from_config(config: &PayNowConfig) -> Result<SharedTransport, PortError> {
    match config.endpoint {
        Some(ref endpoint) => {
            tracing::info!(%endpoint, "using http payment transport");
            Ok(Arc::new(HttpTransport::with_config(endpoint, config)?))
        }
        None => {
            tracing::info!(
                latency_ms = config.mock_latency_ms,
                "using mock payment transport"
            );
            Ok(Arc::new(MockTransport::with_config(config)))
        }
    }
}
