//! UI helper components

use eframe::egui;

use pay_now_core::Currency;

const ACCENT: egui::Color32 = egui::Color32::from_rgb(0, 180, 150);
const ERROR_RED: egui::Color32 = egui::Color32::from_rgb(220, 80, 80);
const FIELD_WIDTH: f32 = 320.0;

/// Styled heading with accent color
pub fn styled_heading(ui: &mut egui::Ui, text: &str) {
    ui.heading(egui::RichText::new(text).color(egui::Color32::from_rgb(0, 212, 170)));
}

/// Fixed, centered window used for every dialog
pub fn modal_window(title: &str) -> egui::Window<'static> {
    egui::Window::new(egui::RichText::new(title).strong())
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
}

/// Inline annotation under a form field
pub fn field_hint(ui: &mut egui::Ui, error: Option<&str>) {
    if let Some(message) = error {
        ui.label(egui::RichText::new(message).small().color(ERROR_RED));
    }
}

fn field_label(ui: &mut egui::Ui, label: &str, required: bool) {
    let text = if required {
        format!("{label} *")
    } else {
        label.to_owned()
    };
    ui.label(egui::RichText::new(text).strong());
}

/// Labeled single-line input with its inline error
pub fn text_field(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut String,
    hint: &str,
    error: Option<&str>,
) -> egui::Response {
    field_label(ui, label, true);
    let response = ui.add(
        egui::TextEdit::singleline(value)
            .hint_text(hint)
            .desired_width(FIELD_WIDTH),
    );
    field_hint(ui, error);
    ui.add_space(8.0);
    response
}

/// Like [`text_field`], but flags text that does not read as a number.
/// The typed text is never rewritten.
pub fn amount_field(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut String,
    hint: &str,
    error: Option<&str>,
) -> egui::Response {
    field_label(ui, label, true);
    let response = ui.add(
        egui::TextEdit::singleline(value)
            .hint_text(hint)
            .desired_width(FIELD_WIDTH),
    );
    field_hint(ui, error.or_else(|| amount_hint(value)));
    ui.add_space(8.0);
    response
}

/// Currency dropdown. Returns true when the selection changed.
pub fn currency_select(
    ui: &mut egui::Ui,
    id: &str,
    label: &str,
    value: &mut String,
    error: Option<&str>,
) -> bool {
    field_label(ui, label, true);
    let selected = if value.is_empty() {
        "Select currency".to_owned()
    } else {
        value.clone()
    };
    let mut changed = false;
    egui::ComboBox::from_id_salt(id)
        .selected_text(selected)
        .width(FIELD_WIDTH)
        .show_ui(ui, |ui| {
            for currency in Currency::ALL {
                let is_selected = *value == currency.code();
                if ui.selectable_label(is_selected, currency.code()).clicked() && !is_selected {
                    *value = currency.code().to_owned();
                    changed = true;
                }
            }
        });
    field_hint(ui, error);
    ui.add_space(8.0);
    changed
}

/// Labeled multiline input
pub fn multiline_field(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut String,
    hint: &str,
    rows: usize,
) -> egui::Response {
    field_label(ui, label, false);
    let response = ui.add(
        egui::TextEdit::multiline(value)
            .hint_text(hint)
            .desired_rows(rows)
            .desired_width(FIELD_WIDTH),
    );
    ui.add_space(8.0);
    response
}

/// Error message display
pub fn error_message(ui: &mut egui::Ui, message: &str) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("❌").size(16.0));
        ui.label(egui::RichText::new(message).color(ERROR_RED));
    });
}

/// Success message display
pub fn success_message(ui: &mut egui::Ui, message: &str) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("✅").size(16.0));
        ui.label(egui::RichText::new(message).color(egui::Color32::from_rgb(80, 200, 120)));
    });
}

/// Primary button with enabled state
pub fn primary_button_enabled(ui: &mut egui::Ui, text: &str, enabled: bool) -> egui::Response {
    let btn = egui::Button::new(egui::RichText::new(text).size(14.0).color(egui::Color32::WHITE))
        .min_size(egui::vec2(130.0, 34.0))
        .fill(ACCENT);
    ui.add_enabled(enabled, btn)
}

/// Secondary action button - subdued, outline style
pub fn secondary_button(ui: &mut egui::Ui, text: &str) -> egui::Response {
    let btn = egui::Button::new(egui::RichText::new(text).size(14.0))
        .min_size(egui::vec2(90.0, 34.0));
    ui.add(btn)
}

pub const NOT_A_NUMBER: &str = "Enter a number";

/// Advisory note for amounts that do not parse as a finite number.
pub fn amount_hint(raw: &str) -> Option<&'static str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse::<f64>() {
        Ok(n) if n.is_finite() => None,
        _ => Some(NOT_A_NUMBER),
    }
}
