use crate::data::document::RecordSink;
use crate::data::Field;
use eframe::egui;

pub mod components;
pub mod form;

use components::CustomButton;
use form::{EntryForm, Outcome, Phase};

/// Main application state
pub struct EntryApp {
    form: EntryForm,
    sink: Box<dyn RecordSink>,
}

impl EntryApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, sink: Box<dyn RecordSink>) -> Self {
        Self {
            form: EntryForm::new(),
            sink,
        }
    }

    fn render_form(&mut self, ui: &mut egui::Ui) {
        let editing = self.form.phase() == Phase::Editing;

        ui.add_enabled_ui(editing, |ui| {
            for field in Field::ALL {
                components::labeled_input(ui, field.label(), self.form.value_mut(field));
            }

            ui.add_space(15.0);
            ui.vertical_centered(|ui| {
                if ui.add(CustomButton::primary("Add")).clicked() {
                    self.form.submit(self.sink.as_ref());
                }
            });
        });

        ui.add_space(10.0);
        ui.vertical_centered(|ui| {
            components::render_status(ui, self.form.status());
        });
    }

    fn render_modals(&mut self, ctx: &egui::Context) {
        if self.form.phase() != Phase::AwaitingConfirmation {
            return;
        }

        let mut answer = None;
        egui::Window::new("Question")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label("Do you want to add another entry?");
                ui.separator();
                ui.horizontal(|ui| {
                    if ui.add(CustomButton::primary("Yes")).clicked() {
                        answer = Some(true);
                    }
                    if ui.add(CustomButton::secondary("No")).clicked() {
                        answer = Some(false);
                    }
                });
            });

        if let Some(add_another) = answer {
            if self.form.confirm(add_another) == Outcome::Terminate {
                log::info!("closing entry form");
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
        }
    }
}

impl eframe::App for EntryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_form(ui);
        });

        self.render_modals(ctx);
    }
}
