// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Taigours E-Sports

//! Top-level egui application shell for the registration form.
//! Handles layout and input wiring; all decisions happen in [`crate::mvu`].

pub mod components;

use std::sync::Arc;
use std::time::Duration;

use chrono::Local;
use eframe::egui;

use crate::logic::link::{LinkOpener, SystemBrowser};
use crate::models::fields::FieldName;
use crate::models::form::{PROVINCES, RegistrationType, SERVERS};
use crate::mvu::{self, AppModel, Command, Msg};
use crate::ui::components::{FieldEvent, field, notices};

/// Stateful egui application for collecting registrations.
pub struct RegistrationApp {
    model: AppModel,
    inbox: Vec<Msg>,
    cmd_tx: crossbeam_channel::Sender<Command>,
    msg_rx: crossbeam_channel::Receiver<Msg>,
}

impl Default for RegistrationApp {
    fn default() -> Self {
        Self::with_opener(Arc::new(SystemBrowser))
    }
}

impl RegistrationApp {
    /// Build the app with a custom link opener running on a background worker.
    ///
    /// Spawns one worker thread that drains [`Command`]s through
    /// [`mvu::run_command`] and sends the resulting messages back to the UI
    /// thread, where they are applied at the start of the next frame.
    /// [`Default`] uses [`SystemBrowser`].
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::sync::Arc;
    ///
    /// use regdesk::logic::link::SystemBrowser;
    /// use regdesk::ui::RegistrationApp;
    ///
    /// let app = RegistrationApp::with_opener(Arc::new(SystemBrowser));
    /// eframe::run_native(
    ///     "Tournament Registration",
    ///     eframe::NativeOptions::default(),
    ///     Box::new(|_cc| Ok(Box::new(app))),
    /// )
    /// .unwrap();
    /// ```
    pub fn with_opener(opener: Arc<dyn LinkOpener>) -> Self {
        let (cmd_tx, cmd_rx) = crossbeam_channel::unbounded::<Command>();
        let (msg_tx, msg_rx) = crossbeam_channel::unbounded::<Msg>();

        std::thread::spawn(move || {
            for cmd in cmd_rx.iter() {
                let msg = mvu::run_command(cmd, opener.as_ref());
                let _ = msg_tx.send(msg);
            }
        });

        Self {
            model: AppModel::default(),
            inbox: Vec::new(),
            cmd_tx,
            msg_rx,
        }
    }
}

impl eframe::App for RegistrationApp {
    /// Drives a single UI frame.
    ///
    /// Drains worker results, expires old notices, applies queued messages to
    /// the model, dispatches resulting commands, then renders the form.
    /// Messages produced while rendering are handled on the next frame.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Pull messages produced by the command worker.
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.model.pending_commands = self.model.pending_commands.saturating_sub(1);
            self.inbox.push(msg);
        }
        self.inbox.push(Msg::Tick(Local::now()));

        for msg in std::mem::take(&mut self.inbox) {
            let mut commands = Vec::new();
            mvu::update(&mut self.model, msg, &mut commands);
            for cmd in commands {
                if self.cmd_tx.send(cmd).is_ok() {
                    self.model.pending_commands += 1;
                }
            }
        }

        // Keep repainting so notices disappear on time without input.
        if !self.model.notices.is_empty() {
            ctx.request_repaint_after(Duration::from_millis(250));
        }

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.heading(format!(
                    "{} Free Fire Tournament Registration",
                    egui_phosphor::regular::GAME_CONTROLLER
                ));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    egui::widgets::global_theme_preference_switch(ui);
                });
            });
            ui.add_space(4.0);
        });

        egui::TopBottomPanel::bottom("status_panel")
            .resizable(false)
            .show(ctx, |ui| self.render_status(ui));

        notices::toasts(ctx, &self.model.notices);
        if notices::success_modal(ctx, self.model.success_open) {
            self.inbox.push(Msg::DismissSuccess);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add_space(8.0);
                self.render_player_section(ui);
                ui.add_space(12.0);
                self.render_location_section(ui);
                ui.add_space(12.0);
                self.render_tournament_section(ui);
                ui.add_space(12.0);
                self.render_terms(ui);
                ui.add_space(12.0);
                self.render_submit(ui);
                ui.add_space(8.0);
            });
        });
    }
}

impl RegistrationApp {
    /// Queue model messages for a field's events.
    fn forward(&mut self, field: FieldName, events: Vec<FieldEvent>) {
        for event in events {
            let msg = match event {
                FieldEvent::Changed(value) => Msg::FieldChanged { field, value },
                FieldEvent::Blurred => Msg::FieldBlurred {
                    field,
                    today: Local::now().date_naive(),
                },
            };
            self.inbox.push(msg);
        }
    }

    fn text_input(&mut self, ui: &mut egui::Ui, field: FieldName, hint: &str) {
        let events = field::text(
            ui,
            field,
            self.model.form.value(field),
            self.model.errors.fields.get(&field),
            hint,
        );
        self.forward(field, events);
    }

    fn select_input(&mut self, ui: &mut egui::Ui, field: FieldName, options: &[&str]) {
        let events = field::select(
            ui,
            field,
            self.model.form.value(field),
            options,
            self.model.errors.fields.get(&field),
        );
        self.forward(field, events);
    }

    fn section(ui: &mut egui::Ui, title: &str, body: impl FnOnce(&mut egui::Ui)) {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.heading(title);
            ui.add_space(6.0);
            body(ui);
        });
    }

    fn render_player_section(&mut self, ui: &mut egui::Ui) {
        let title = format!("{} Player Information", egui_phosphor::regular::USER);
        Self::section(ui, &title, |ui| {
            self.text_input(ui, FieldName::FullName, "Your full name");
            self.text_input(ui, FieldName::InGameName, "Name shown in game");
            self.text_input(ui, FieldName::FreeFireUid, "8-12 digit UID");
            self.text_input(ui, FieldName::WhatsappNumber, "+977 98XXXXXXXX");
            self.text_input(ui, FieldName::Email, "name@example.com");

            let dob = FieldName::DateOfBirth;
            let events = field::date(
                ui,
                dob,
                self.model.form.value(dob),
                self.model.errors.fields.get(&dob),
            );
            self.forward(dob, events);
        });
    }

    fn render_location_section(&mut self, ui: &mut egui::Ui) {
        let title = format!("{} Location", egui_phosphor::regular::MAP_PIN);
        Self::section(ui, &title, |ui| {
            self.select_input(ui, FieldName::Province, PROVINCES);
            self.text_input(ui, FieldName::City, "City or village");
        });
    }

    fn render_tournament_section(&mut self, ui: &mut egui::Ui) {
        let title = format!("{} Tournament Details", egui_phosphor::regular::TROPHY);
        Self::section(ui, &title, |ui| {
            self.text_input(ui, FieldName::TeamName, "Your team");

            ui.label("Registration Type *");
            ui.horizontal(|ui| {
                let current = self.model.form.registration_type;
                for kind in RegistrationType::ALL {
                    if ui.radio(current == Some(kind), kind.as_str()).clicked() {
                        self.inbox.push(Msg::RegistrationTypeSelected(kind));
                    }
                }
            });
            field::error_text(ui, self.model.errors.registration_type.as_ref());

            self.select_input(ui, FieldName::Server, SERVERS);
            self.text_input(ui, FieldName::ReferCode, "Optional");
        });
    }

    fn render_terms(&mut self, ui: &mut egui::Ui) {
        let mut accepted = self.model.form.accept_terms;
        if ui
            .checkbox(&mut accepted, "I accept the tournament terms and conditions")
            .changed()
        {
            self.inbox.push(Msg::TermsToggled(accepted));
        }
        field::error_text(ui, self.model.errors.terms.as_ref());
    }

    fn render_submit(&mut self, ui: &mut egui::Ui) {
        let button = egui::Button::new(format!(
            "{} Register via WhatsApp",
            egui_phosphor::regular::WHATSAPP_LOGO
        ));
        if ui.add(button).clicked() {
            self.inbox.push(Msg::SubmitRequested { now: Local::now() });
        }
    }

    /// Render latest status message when present.
    fn render_status(&self, ui: &mut egui::Ui) {
        let text = self
            .model
            .status
            .as_deref()
            .unwrap_or("Fill in every required (*) field, then register.");
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(text).color(egui::Color32::from_gray(68)));
            if self.model.pending_commands > 0 {
                ui.add(egui::Spinner::new().size(14.0))
                    .on_hover_text("Opening WhatsApp…");
            }
        });
    }
}
