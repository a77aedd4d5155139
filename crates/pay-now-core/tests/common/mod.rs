#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;

use pay_now_core::{
    FailureKind, FormField, Navigator, Outcome, PaymentRequest, PaymentTransport, PaymentWidget,
};

/// Replays queued outcomes; an empty queue answers with success.
#[derive(Debug, Default)]
pub struct QueuedTransport {
    outcomes: RefCell<VecDeque<Outcome>>,
    pub sent: RefCell<Vec<PaymentRequest>>,
}

impl QueuedTransport {
    pub fn answering(outcome: Outcome) -> Self {
        let t = Self::default();
        t.outcomes.borrow_mut().push_back(outcome);
        t
    }
}

impl PaymentTransport for QueuedTransport {
    fn send(&self, request: &PaymentRequest) -> Outcome {
        self.sent.borrow_mut().push(request.clone());
        self.outcomes
            .borrow_mut()
            .pop_front()
            .unwrap_or(Outcome::Success)
    }
}

#[derive(Debug, Default)]
pub struct PathLog {
    pub visits: RefCell<Vec<String>>,
}

impl Navigator for PathLog {
    fn go_to(&self, path: &str) {
        self.visits.borrow_mut().push(path.to_owned());
    }
}

pub type TestWidget = PaymentWidget<QueuedTransport, PathLog>;

pub fn widget_answering(outcome: Outcome) -> TestWidget {
    PaymentWidget::new(QueuedTransport::answering(outcome), PathLog::default())
}

pub fn widget_failing(kind: FailureKind) -> TestWidget {
    widget_answering(Outcome::failed(kind))
}

pub fn fill_valid<T: PaymentTransport, N: Navigator>(widget: &mut PaymentWidget<T, N>) {
    widget.set(FormField::To, "a@b.com");
    widget.set(FormField::From, "BTC");
    widget.set(FormField::Amount, "5");
}
