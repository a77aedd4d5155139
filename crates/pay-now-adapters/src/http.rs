use pay_now_core::{Failure, FailureKind, Outcome, PaymentRequest, PaymentTransport, PortError};

use crate::PayNowConfig;

/// Posts the request as JSON to a payment endpoint and buckets the response
/// status. Connection problems are reported as server errors.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    endpoint: String,
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn with_config(endpoint: &str, config: &PayNowConfig) -> Result<Self, PortError> {
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(PortError::Config(format!(
                "payment endpoint must be an http(s) url: {endpoint}"
            )));
        }
        let client = reqwest::blocking::Client::builder()
            .timeout(config.http_timeout())
            .build()
            .map_err(|e| PortError::Config(format!("failed to build http client: {e}")))?;
        Ok(Self {
            endpoint: endpoint.to_owned(),
            client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl PaymentTransport for HttpTransport {
    fn send(&self, request: &PaymentRequest) -> Outcome {
        match self.client.post(&self.endpoint).json(request).send() {
            Ok(response) => {
                let status = response.status();
                tracing::debug!(status = status.as_u16(), endpoint = %self.endpoint, "payment api answered");
                Outcome::from_status(
                    status.as_u16(),
                    status.canonical_reason().unwrap_or("Unknown Status"),
                )
            }
            Err(e) => {
                tracing::warn!(endpoint = %self.endpoint, error = %e, "payment request failed");
                Outcome::Failed(Failure::new(
                    FailureKind::ServerError,
                    format!("request failed: {e}"),
                ))
            }
        }
    }
}
