//! Chat panel — the transcript and the free-text input row.
//!
//! The transcript is append-only: each message is rendered from its
//! own content every frame, and nothing rendered earlier is mutated.
//! The input row only exists while the text surface is active — a
//! structured surface replaces it entirely.

use egui::{self, Align, RichText, ScrollArea};

use widget_core::controller::ChatController;
use widget_types::message::Role;

use crate::format;
use crate::state::ShellState;
use crate::theme::*;

/// Render the transcript and (when active) the text input row.
/// Returns Some(message) when the user submits text.
pub fn chat_panel(
    ui: &mut egui::Ui,
    ctrl: &ChatController,
    shell: &mut ShellState,
) -> Option<String> {
    let mut submitted = None;

    let show_input = ctrl.surface().is_text();
    // A structured surface renders below the transcript and needs room.
    let available_height = if show_input {
        (ui.available_height() - 44.0).max(60.0)
    } else {
        (ui.available_height() * 0.5).max(60.0)
    };

    ScrollArea::vertical()
        .max_height(available_height)
        .auto_shrink([false, false])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            for message in ctrl.transcript() {
                render_message(ui, ctrl.display_name(), message.role, &message.content);
                ui.add_space(4.0);
            }

            if ctrl.is_in_flight() {
                ui.label(RichText::new("…").color(TEXT_SECONDARY).strong());
            }

            if shell.scroll_to_bottom {
                ui.scroll_to_cursor(Some(Align::BOTTOM));
                shell.scroll_to_bottom = false;
            }
        });

    if show_input {
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            let input = egui::TextEdit::singleline(&mut shell.input_text)
                .hint_text("Type a message...")
                .desired_width(ui.available_width() - 70.0)
                .font(egui::FontId::proportional(14.0));

            let response = ui.add(input);

            let send_enabled = !shell.input_text.trim().is_empty() && !ctrl.is_in_flight();
            let send_button = ui.add_enabled(
                send_enabled,
                egui::Button::new(RichText::new("Send").color(BG_PRIMARY))
                    .fill(if send_enabled { ACCENT } else { BG_SURFACE })
                    .corner_radius(PANEL_ROUNDING),
            );

            // Submit on Enter or button click
            if (response.lost_focus()
                && ui.input(|i| i.key_pressed(egui::Key::Enter))
                && send_enabled)
                || send_button.clicked()
            {
                let text = shell.input_text.trim().to_string();
                submitted = Some(text);
                shell.input_text.clear();
                response.request_focus();
            }
        });
    }

    submitted
}

fn render_message(ui: &mut egui::Ui, display_name: &str, role: Role, content: &str) {
    let (label, label_color, bg) = match role {
        Role::User => ("You", ACCENT, BG_USER_BUBBLE),
        Role::Assistant => (display_name, SUCCESS, BG_SECONDARY),
    };

    egui::Frame::default()
        .fill(bg)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.label(RichText::new(label).color(label_color).strong().small());
            for (i, paragraph) in format::parse_message(content).iter().enumerate() {
                if i > 0 {
                    ui.add_space(6.0);
                }
                ui.horizontal_wrapped(|ui| {
                    ui.spacing_mut().item_spacing.x = 0.0;
                    for span in paragraph {
                        let mut text = RichText::new(&span.text).color(TEXT_PRIMARY);
                        if span.bold {
                            text = text.strong();
                        }
                        if span.italic {
                            text = text.italics();
                        }
                        ui.label(text);
                    }
                });
            }
        });
}
