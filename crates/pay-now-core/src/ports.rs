use std::sync::Arc;

use thiserror::Error;

use crate::domain::PaymentRequest;
use crate::outcome::Outcome;

#[derive(Debug, Error)]
pub enum PortError {
    #[error("config error: {0}")]
    Config(String),
}

/// Carries a payment request to whatever accepts payments.
///
/// Implementations never fail outright: every problem, including a dead
/// connection, is reported as one of the [`Outcome`] failure kinds.
pub trait PaymentTransport {
    fn send(&self, request: &PaymentRequest) -> Outcome;
}

/// Moves the user to another view, identified by path.
pub trait Navigator {
    fn go_to(&self, path: &str);
}

impl<T: PaymentTransport + ?Sized> PaymentTransport for Arc<T> {
    fn send(&self, request: &PaymentRequest) -> Outcome {
        (**self).send(request)
    }
}
