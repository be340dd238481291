//! Contact form surface — the subset of name/phone/email fields the
//! directive asked for.

use egui::{self, RichText};

use widget_core::surface::ContactFormSurface;

use crate::panels::submit_button;
use crate::theme::*;

/// Render the form. Returns true when the user submits at least one
/// filled field.
pub fn contact_form_panel(
    ui: &mut egui::Ui,
    surface: &mut ContactFormSurface,
    in_flight: bool,
) -> bool {
    let fields = surface.rendered_fields().to_vec();

    egui::Frame::default()
        .fill(BG_SECONDARY)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            for field in fields {
                ui.label(
                    RichText::new(field.label())
                        .color(TEXT_SECONDARY)
                        .small(),
                );
                ui.add(
                    egui::TextEdit::singleline(surface.value_mut(field))
                        .desired_width(ui.available_width()),
                );
                ui.add_space(4.0);
            }
        });

    submit_button(ui, surface.can_submit() && !in_flight)
}
