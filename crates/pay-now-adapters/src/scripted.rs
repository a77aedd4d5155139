use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

use pay_now_core::{FailureKind, Outcome, PaymentRequest, PaymentTransport};

/// Deterministic transport: replays queued outcomes in order, then keeps
/// answering with the fallback. Records every request it was given.
#[derive(Debug)]
pub struct ScriptedTransport {
    queue: Mutex<VecDeque<Outcome>>,
    fallback: Outcome,
    sent: Mutex<Vec<PaymentRequest>>,
}

impl ScriptedTransport {
    pub fn always(outcome: Outcome) -> Self {
        Self::sequence(Vec::new(), outcome)
    }

    pub fn failing(kind: FailureKind) -> Self {
        Self::always(Outcome::failed(kind))
    }

    pub fn sequence(outcomes: Vec<Outcome>, fallback: Outcome) -> Self {
        Self {
            queue: Mutex::new(outcomes.into()),
            fallback,
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn push(&self, outcome: Outcome) {
        self.queue
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(outcome);
    }

    pub fn sent(&self) -> Vec<PaymentRequest> {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl PaymentTransport for ScriptedTransport {
    fn send(&self, request: &PaymentRequest) -> Outcome {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request.clone());
        self.queue
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
            .unwrap_or_else(|| self.fallback.clone())
    }
}
