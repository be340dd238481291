pub mod chat;
pub mod contact_form;
pub mod datetime_picker;
pub mod service_select;

use egui::{RichText, Vec2};

use crate::theme::*;

/// Shared Continue button for the structured surfaces. Returns true on
/// click; disabled until the surface's selection is submittable.
pub(crate) fn submit_button(ui: &mut egui::Ui, enabled: bool) -> bool {
    ui.add_space(6.0);
    let button = ui.add_enabled(
        enabled,
        egui::Button::new(RichText::new("Continue").color(BG_PRIMARY).strong())
            .fill(if enabled { ACCENT } else { BG_SURFACE })
            .corner_radius(PANEL_ROUNDING)
            .min_size(Vec2::new(90.0, 28.0)),
    );
    button.clicked()
}
