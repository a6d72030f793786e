// Common UI components
use super::form::Status;
use eframe::egui;

pub struct CustomButton;

impl CustomButton {
    pub fn primary(text: &str) -> egui::Button {
        egui::Button::new(text).fill(egui::Color32::from_rgb(0, 122, 255))
    }

    pub fn secondary(text: &str) -> egui::Button {
        egui::Button::new(text).fill(egui::Color32::from_rgb(108, 117, 125))
    }
}

/// Status line under the form: green on success, red on error
pub fn render_status(ui: &mut egui::Ui, status: &Status) {
    match status {
        Status::Idle => {
            ui.label("");
        }
        Status::Success(message) => {
            ui.colored_label(egui::Color32::GREEN, message);
        }
        Status::Error(message) => {
            ui.colored_label(egui::Color32::RED, message);
        }
    }
}

/// Labeled single-line input stretched to the panel width
pub fn labeled_input(ui: &mut egui::Ui, label: &str, value: &mut String) {
    ui.label(label);
    ui.add(egui::TextEdit::singleline(value).desired_width(f32::INFINITY));
    ui.add_space(5.0);
}
