//! Date/time picker surface. One row of selectable dates over the
//! slots the directive offered, then the slot list for the active date.

use egui::{self, RichText};

use widget_core::encode;
use widget_core::surface::DateTimePickerSurface;

use crate::panels::submit_button;
use crate::theme::*;

/// Render the picker. Returns true when the user submits a chosen slot.
pub fn datetime_picker_panel(
    ui: &mut egui::Ui,
    surface: &mut DateTimePickerSurface,
    in_flight: bool,
) -> bool {
    let dates = surface.config.dates();
    let mut picked_date: Option<String> = None;
    let mut picked_slot: Option<String> = None;

    egui::Frame::default()
        .fill(BG_SECONDARY)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            if dates.is_empty() {
                ui.label(
                    RichText::new("No appointment times are available right now.")
                        .color(TEXT_SECONDARY),
                );
                return;
            }

            ui.horizontal_wrapped(|ui| {
                for date in &dates {
                    let active = date == surface.active_date();
                    if ui
                        .selectable_label(active, encode::long_date(date))
                        .clicked()
                    {
                        picked_date = Some(date.clone());
                    }
                }
            });

            ui.separator();

            let slots: Vec<(String, String, Option<String>)> = surface
                .visible_slots()
                .iter()
                .map(|s| (s.id.clone(), s.time.clone(), s.staff_name.clone()))
                .collect();

            if slots.is_empty() {
                // Explicit empty state, never a blank list.
                ui.label(
                    RichText::new("No available times for this date.").color(TEXT_SECONDARY),
                );
            } else {
                for (id, time, staff_name) in &slots {
                    let selected = surface.selected_slot() == Some(id.as_str());
                    let mut label = encode::twelve_hour_time(time);
                    if let Some(staff) = staff_name {
                        label.push_str(&format!(" with {}", staff));
                    }
                    if ui.selectable_label(selected, label).clicked() {
                        picked_slot = Some(id.clone());
                    }
                }
            }
        });

    if let Some(date) = picked_date {
        surface.select_date(&date);
    }
    if let Some(id) = picked_slot {
        surface.select_slot(&id);
    }

    submit_button(ui, surface.can_submit() && !in_flight)
}
