#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::thread;

use tiny_http::{Method, Response, Server, StatusCode};

use pay_now_adapters::{RecordingNavigator, ScriptedTransport};
use pay_now_core::{FormField, Navigator, Outcome, PaymentTransport, PaymentWidget};

pub type TestWidget = PaymentWidget<ScriptedTransport, RecordingNavigator>;

pub fn widget(outcome: Outcome) -> TestWidget {
    PaymentWidget::new(ScriptedTransport::always(outcome), RecordingNavigator::default())
}

pub fn fill_valid<T: PaymentTransport, N: Navigator>(widget: &mut PaymentWidget<T, N>) {
    widget.set(FormField::To, "a@b.com");
    widget.set(FormField::From, "BTC");
    widget.set(FormField::Amount, "5");
}

/// Answers every POST to `/payments` with `status` and records the bodies.
pub fn spawn_payment_server(
    status: u16,
    requests: usize,
    bodies: Arc<Mutex<Vec<serde_json::Value>>>,
) -> (String, thread::JoinHandle<()>) {
    let server = Server::http("127.0.0.1:0").expect("start server");
    let addr = format!("http://{}/payments", server.server_addr());

    let join = thread::spawn(move || {
        for _ in 0..requests {
            let mut req = match server.recv() {
                Ok(r) => r,
                Err(_) => break,
            };
            let mut raw = String::new();
            let _ = req.as_reader().read_to_string(&mut raw);
            if let Ok(body) = serde_json::from_str(&raw) {
                if let Ok(mut g) = bodies.lock() {
                    g.push(body);
                }
            }

            let code = match (req.method(), req.url()) {
                (Method::Post, "/payments") => status,
                _ => 404,
            };
            let response = Response::from_string(serde_json::json!({"status": code}).to_string())
                .with_status_code(StatusCode(code));
            let _ = req.respond(response);
        }
    });

    (addr, join)
}
