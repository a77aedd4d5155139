//! Main application state and update loop

use eframe::egui;
use std::sync::{Arc, Mutex, PoisonError};

use pay_now_adapters::{PayNowConfig, SharedTransport};
use pay_now_core::{
    FormField, Outcome, PaymentTransport, PaymentWidget, SessionId, Settlement, UiState,
};

use crate::router::{Route, Router};
use crate::ui;

/// Outcome handed back by a submission worker
struct SettledSubmission {
    session: SessionId,
    outcome: Outcome,
}

enum FormAction {
    Cancel,
    Submit,
}

/// The main application state
pub struct App {
    /// Payment widget; its navigator doubles as the screen router
    widget: PaymentWidget<SharedTransport, Router>,
    /// Outcomes delivered by worker threads, drained every frame
    settled: Arc<Mutex<Vec<SettledSubmission>>>,
}

impl App {
    pub fn new(transport: SharedTransport, config: &PayNowConfig) -> Self {
        let router = Router::new(config.login_path.clone());
        Self {
            widget: PaymentWidget::new(transport, router).with_login_path(config.login_path.clone()),
            settled: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(egui::Visuals::dark());

        // Apply any outcomes that arrived since the last frame
        self.check_settled();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(8.0);
            ui.heading(
                egui::RichText::new("💳 Pay Now")
                    .size(22.0)
                    .color(egui::Color32::from_rgb(0, 212, 170)),
            );
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(10.0);
            match self.widget.navigator.current() {
                Route::Payment => self.render_payment_screen(ui),
                Route::Login => self.render_login_screen(ui),
            }
        });

        match self.widget.state().clone() {
            UiState::Closed => {}
            UiState::Open => self.render_form_dialog(ctx),
            UiState::Success => self.render_success_dialog(ctx),
            UiState::Failed(message) => self.render_error_dialog(ctx, &message),
        }
    }
}

impl App {
    fn render_payment_screen(&mut self, ui: &mut egui::Ui) {
        ui::styled_heading(ui, "Payments");
        ui.label("Send BTC or ETH to anyone with an email address.");
        ui.add_space(20.0);

        let idle = *self.widget.state() == UiState::Closed;
        if ui::primary_button_enabled(ui, "Pay Now", idle).clicked() {
            self.widget.open();
        }
    }

    fn render_login_screen(&mut self, ui: &mut egui::Ui) {
        ui::styled_heading(ui, "Sign in");
        ui.label("Your session is not authorized. Sign in again to keep paying.");
        ui.add_space(20.0);

        if ui::secondary_button(ui, "Back to payments").clicked() {
            self.widget.navigator.go_home();
        }
    }

    fn render_form_dialog(&mut self, ctx: &egui::Context) {
        let mut action = None;

        ui::modal_window("Payment Details").show(ctx, |ui| {
            let form = self.widget.form().clone();

            let mut to = form.to;
            if ui::text_field(
                ui,
                "To",
                &mut to,
                "Enter recipient's email",
                self.widget.field_error(FormField::To),
            )
            .changed()
            {
                self.widget.set(FormField::To, to);
            }

            let mut from = form.from;
            if ui::currency_select(
                ui,
                "from_select",
                "From",
                &mut from,
                self.widget.field_error(FormField::From),
            ) {
                self.widget.set(FormField::From, from);
            }

            let mut amount = form.amount;
            if ui::amount_field(
                ui,
                "Amount",
                &mut amount,
                "Enter amount",
                self.widget.field_error(FormField::Amount),
            )
            .changed()
            {
                self.widget.set(FormField::Amount, amount);
            }

            let mut description = form.description;
            if ui::multiline_field(ui, "Description", &mut description, "Optional description", 3)
                .changed()
            {
                self.widget.set(FormField::Description, description);
            }

            ui.separator();
            ui.horizontal(|ui| {
                if ui::secondary_button(ui, "Cancel").clicked() {
                    action = Some(FormAction::Cancel);
                }
                if ui::primary_button_enabled(ui, "Submit", self.widget.can_submit()).clicked() {
                    action = Some(FormAction::Submit);
                }
                if self.widget.is_submitting() {
                    ui.spinner();
                }
            });
        });

        match action {
            Some(FormAction::Cancel) => self.widget.close(),
            Some(FormAction::Submit) => self.start_submission(ctx),
            None => {}
        }
    }

    fn render_success_dialog(&mut self, ctx: &egui::Context) {
        let mut dismissed = false;
        ui::modal_window("Success").show(ctx, |ui| {
            ui::success_message(ui, "Payment was successful!");
            ui.add_space(10.0);
            dismissed = ui::secondary_button(ui, "Close").clicked();
        });
        if dismissed {
            self.widget.dismiss();
        }
    }

    fn render_error_dialog(&mut self, ctx: &egui::Context, message: &str) {
        let mut dismissed = false;
        ui::modal_window("Error").show(ctx, |ui| {
            ui::error_message(ui, message);
            ui.add_space(10.0);
            dismissed = ui::secondary_button(ui, "Close").clicked();
        });
        if dismissed {
            self.widget.dismiss();
        }
    }

    fn start_submission(&mut self, ctx: &egui::Context) {
        let pending = match self.widget.begin_submit() {
            Ok(pending) => pending,
            Err(e) => {
                tracing::warn!(error = %e, "submit refused");
                return;
            }
        };

        let transport = Arc::clone(&self.widget.transport);
        let settled = Arc::clone(&self.settled);
        let ctx = ctx.clone();

        // The transport blocks for the round trip, keep it off the UI thread
        std::thread::spawn(move || {
            let outcome = transport.send(&pending.request);
            settled
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(SettledSubmission {
                    session: pending.session,
                    outcome,
                });
            ctx.request_repaint();
        });
    }

    fn check_settled(&mut self) {
        let arrived: Vec<SettledSubmission> = {
            let mut guard = self.settled.lock().unwrap_or_else(PoisonError::into_inner);
            guard.drain(..).collect()
        };

        for SettledSubmission { session, outcome } in arrived {
            if let Settlement::Applied(state) = self.widget.settle(session, outcome) {
                tracing::debug!(state = state.name(), "submission settled");
            }
        }
    }
}
