// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Taigours E-Sports

//! Labelled form inputs that report edits and focus loss.

use chrono::{Local, Months, NaiveDate};
use eframe::egui;
use egui_extras::DatePickerButton;

use crate::logic::validation::ValidationError;
use crate::models::fields::FieldName;

/// Interaction reported by a single input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldEvent {
    Changed(String),
    /// Focus left the input (or a picker committed a value).
    Blurred,
}

/// Error colour shared by inline messages and notices.
pub const ERROR_RED: egui::Color32 = egui::Color32::from_rgb(0xff, 0x44, 0x44);

fn label(ui: &mut egui::Ui, field: FieldName) {
    let def = field.definition();
    let mut text = def.label.to_string();
    if def.required {
        text.push_str(" *");
    }
    ui.label(text);
}

/// Inline message below an input; renders nothing when valid.
pub fn error_text(ui: &mut egui::Ui, error: Option<&ValidationError>) {
    if let Some(err) = error {
        ui.label(egui::RichText::new(err.to_string()).small().color(ERROR_RED));
    }
}

/// Single-line text input.
pub fn text(
    ui: &mut egui::Ui,
    field: FieldName,
    value: &str,
    error: Option<&ValidationError>,
    hint: &str,
) -> Vec<FieldEvent> {
    let mut events = Vec::new();
    label(ui, field);

    let mut buffer = value.to_string();
    let mut edit = egui::TextEdit::singleline(&mut buffer)
        .hint_text(hint)
        .desired_width(f32::INFINITY);
    if error.is_some() {
        edit = edit.text_color(ERROR_RED);
    }
    let resp = ui.add(edit);
    if resp.changed() {
        events.push(FieldEvent::Changed(buffer));
    }
    if resp.lost_focus() {
        events.push(FieldEvent::Blurred);
    }

    error_text(ui, error);
    events
}

/// Drop-down with a placeholder entry for "nothing chosen".
pub fn select(
    ui: &mut egui::Ui,
    field: FieldName,
    value: &str,
    options: &[&str],
    error: Option<&ValidationError>,
) -> Vec<FieldEvent> {
    let mut events = Vec::new();
    label(ui, field);

    let placeholder = format!("Select {}", field.label());
    let selected = if value.is_empty() {
        placeholder.as_str()
    } else {
        value
    };
    let combo = egui::ComboBox::from_id_salt(field.key())
        .width(ui.available_width())
        .selected_text(selected)
        .show_ui(ui, |ui| {
            for opt in options {
                if ui.selectable_label(value == *opt, *opt).clicked() && value != *opt {
                    events.push(FieldEvent::Changed(opt.to_string()));
                }
            }
        });

    // Closing the popup counts as blur, with or without a new selection.
    let popup_id = egui::Id::new(("select_popup_open", field.key()));
    if popup_closed(ui.ctx(), popup_id, combo.inner.is_some()) {
        events.push(FieldEvent::Blurred);
    }

    error_text(ui, error);
    events
}

/// Record whether a popup is open this frame; true on the frame it closes.
fn popup_closed(ctx: &egui::Context, id: egui::Id, open_now: bool) -> bool {
    ctx.data_mut(|data| {
        let was_open = data.get_temp::<bool>(id).unwrap_or(false);
        data.insert_temp(id, open_now);
        was_open && !open_now
    })
}

/// ISO date input with a calendar button next to it.
pub fn date(
    ui: &mut egui::Ui,
    field: FieldName,
    value: &str,
    error: Option<&ValidationError>,
) -> Vec<FieldEvent> {
    let mut events = Vec::new();
    label(ui, field);

    ui.horizontal(|ui| {
        let mut buffer = value.to_string();
        let resp = ui.add(
            egui::TextEdit::singleline(&mut buffer)
                .hint_text("YYYY-MM-DD")
                .desired_width(120.0),
        );
        if resp.changed() {
            events.push(FieldEvent::Changed(buffer));
        }
        if resp.lost_focus() {
            events.push(FieldEvent::Blurred);
        }

        let mut picked = picker_start(value);
        if ui
            .add(DatePickerButton::new(&mut picked).show_icon(true))
            .changed()
        {
            events.push(FieldEvent::Changed(picked.format("%Y-%m-%d").to_string()));
            events.push(FieldEvent::Blurred);
        }
    });

    error_text(ui, error);
    events
}

/// Date the calendar opens on: the typed date, else eighteen years ago.
fn picker_start(value: &str) -> NaiveDate {
    let today = Local::now().date_naive();
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .ok()
        .or_else(|| today.checked_sub_months(Months::new(18 * 12)))
        .unwrap_or(today)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closing_a_popup_reports_blur_once() {
        let ctx = egui::Context::default();
        let id = egui::Id::new(("select_popup_open", "province"));

        assert!(!popup_closed(&ctx, id, false), "never opened");
        assert!(!popup_closed(&ctx, id, true), "opening is not a blur");
        assert!(!popup_closed(&ctx, id, true));
        assert!(popup_closed(&ctx, id, false), "closing is a blur");
        assert!(!popup_closed(&ctx, id, false), "only on the closing frame");
    }

    #[test]
    fn popups_are_tracked_per_field() {
        let ctx = egui::Context::default();
        let province = egui::Id::new(("select_popup_open", "province"));
        let server = egui::Id::new(("select_popup_open", "server"));

        popup_closed(&ctx, province, true);
        assert!(!popup_closed(&ctx, server, false));
        assert!(popup_closed(&ctx, province, false));
    }

    #[test]
    fn picker_starts_on_typed_date() {
        assert_eq!(
            picker_start(" 2004-02-29 "),
            NaiveDate::from_ymd_opt(2004, 2, 29).unwrap()
        );
    }

    #[test]
    fn picker_falls_back_to_adult_birth_year() {
        let today = Local::now().date_naive();
        let start = picker_start("");
        assert!(start < today);
        assert_eq!(today.years_since(start), Some(18));
    }
}
