//! Service selection surface — checkbox list (or radio, for
//! single-select) over the services the directive offered.

use egui::{self, RichText};

use widget_core::surface::ServiceSelectSurface;

use crate::panels::submit_button;
use crate::theme::*;

/// Render the service list. Returns true when the user submits a
/// non-empty selection.
pub fn service_select_panel(
    ui: &mut egui::Ui,
    surface: &mut ServiceSelectSurface,
    in_flight: bool,
) -> bool {
    let mut clicked: Option<String> = None;

    egui::Frame::default()
        .fill(BG_SECONDARY)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            for service in &surface.config.services {
                let mut checked = surface.is_selected(&service.id);
                let label = format!("{} — ${:.2}", service.name, service.price);
                if ui
                    .checkbox(&mut checked, RichText::new(label).color(TEXT_PRIMARY))
                    .clicked()
                {
                    clicked = Some(service.id.clone());
                }
                let mut details = Vec::new();
                if let Some(minutes) = service.duration_minutes {
                    details.push(format!("{} min", minutes));
                }
                if let Some(description) = &service.description {
                    details.push(description.clone());
                }
                if !details.is_empty() {
                    ui.label(
                        RichText::new(details.join(" · "))
                            .color(TEXT_SECONDARY)
                            .small(),
                    );
                }
            }
        });

    if let Some(id) = clicked {
        surface.toggle(&id);
    }

    submit_button(ui, surface.can_submit() && !in_flight)
}
