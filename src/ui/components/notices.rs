// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Taigours E-Sports

//! Error toasts and the success acknowledgment.

use eframe::egui;

use crate::mvu::Notice;
use crate::ui::components::field::ERROR_RED;

/// Stack error notices in the top-right corner. They expire on their own.
pub fn toasts(ctx: &egui::Context, notices: &[Notice]) {
    if notices.is_empty() {
        return;
    }

    egui::Area::new(egui::Id::new("error_notices"))
        .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-20.0, 20.0))
        .order(egui::Order::Foreground)
        .interactable(false)
        .show(ctx, |ui| {
            for notice in notices {
                egui::Frame::popup(ui.style())
                    .fill(ERROR_RED)
                    .show(ui, |ui| {
                        ui.label(
                            egui::RichText::new(&notice.message)
                                .strong()
                                .color(egui::Color32::WHITE),
                        );
                    });
                ui.add_space(6.0);
            }
        });
}

/// Modal shown after a registration was handed off. Returns true when closed.
pub fn success_modal(ctx: &egui::Context, open: bool) -> bool {
    if !open {
        return false;
    }

    let mut closed = false;
    egui::Window::new("Registration sent")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            ui.label(format!(
                "{} Your registration has been prepared in WhatsApp.",
                egui_phosphor::regular::CHECK_CIRCLE
            ));
            ui.label("Send the pre-filled message to complete your registration.");
            ui.add_space(8.0);
            if ui.button("Close").clicked() {
                closed = true;
            }
        });
    closed
}
