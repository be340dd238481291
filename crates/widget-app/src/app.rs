//! Widget shell — launcher, chat window chrome, and dispatch.
//!
//! Holds the controller in an `Rc<RefCell<_>>` shared with spawned
//! futures. Panels render from a short-lived borrow and return actions;
//! dispatch happens after the borrow is released, so an in-flight
//! response can always land even while a frame is rendering.

use std::cell::RefCell;
use std::rc::Rc;

use egui::{self, Align2, RichText, Vec2};

use widget_core::controller::ChatController;
use widget_core::event_bus::EventBus;
use widget_core::ports::ChatTransport;
use widget_core::surface::InputSurface;
use widget_platform::storage::auto_detect_store;
use widget_platform::transport::HttpTransport;
use widget_types::config::WidgetConfig;
use widget_ui::panels::{chat, contact_form, datetime_picker, service_select};
use widget_ui::state::ShellState;
use widget_ui::theme;

const WINDOW_SIZE: Vec2 = Vec2::new(340.0, 480.0);
const ANCHOR_MARGIN: Vec2 = Vec2::new(-16.0, -16.0);

pub struct WidgetApp {
    shell: ShellState,
    event_bus: EventBus,
    controller: Rc<RefCell<ChatController>>,
    transport: Rc<dyn ChatTransport>,
    first_frame: bool,
}

impl WidgetApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: WidgetConfig) -> Self {
        let event_bus = EventBus::new();
        let store = auto_detect_store();
        let transport: Rc<dyn ChatTransport> =
            Rc::new(HttpTransport::new(config.api_base.clone()));
        let controller = Rc::new(RefCell::new(ChatController::new(
            config,
            store,
            event_bus.clone(),
        )));

        Self {
            shell: ShellState::new(),
            event_bus,
            controller,
            transport,
            first_frame: true,
        }
    }

    // ─── Dispatch (async, via spawn_local) ───────────────────

    fn dispatch_activate(&self, ctx: &egui::Context) {
        let controller = self.controller.clone();
        let transport = self.transport.clone();
        let ctx = ctx.clone();
        wasm_bindgen_futures::spawn_local(async move {
            ChatController::activate(&controller, transport.as_ref()).await;
            ctx.request_repaint();
        });
    }

    fn dispatch_send(&self, text: String, ctx: &egui::Context) {
        let controller = self.controller.clone();
        let transport = self.transport.clone();
        let ctx = ctx.clone();
        wasm_bindgen_futures::spawn_local(async move {
            ChatController::send(&controller, transport.as_ref(), &text).await;
            ctx.request_repaint();
        });
    }

    fn dispatch_submit(&self, ctx: &egui::Context) {
        let controller = self.controller.clone();
        let transport = self.transport.clone();
        let ctx = ctx.clone();
        wasm_bindgen_futures::spawn_local(async move {
            ChatController::submit_selection(&controller, transport.as_ref()).await;
            ctx.request_repaint();
        });
    }

    fn dispatch_reset(&self, ctx: &egui::Context) {
        let controller = self.controller.clone();
        let transport = self.transport.clone();
        let ctx = ctx.clone();
        wasm_bindgen_futures::spawn_local(async move {
            ChatController::reset(&controller, transport.as_ref()).await;
            ctx.request_repaint();
        });
    }

    // ─── Chrome ──────────────────────────────────────────────

    fn header(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let display_name = self.controller.borrow().display_name().to_string();
        ui.horizontal(|ui| {
            ui.label(
                RichText::new(display_name)
                    .color(theme::TEXT_PRIMARY)
                    .strong(),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("✕").clicked() {
                    // Closing hides the window; an in-flight reply still
                    // lands in the hidden transcript.
                    self.controller.borrow_mut().close();
                    self.shell.confirm_reset = false;
                }
                if self.shell.confirm_reset {
                    if ui
                        .button(RichText::new("Confirm").color(theme::ERROR))
                        .clicked()
                    {
                        self.shell.confirm_reset = false;
                        self.dispatch_reset(ctx);
                    }
                    if ui.button("Keep").clicked() {
                        self.shell.confirm_reset = false;
                    }
                    ui.label(
                        RichText::new("Start over?")
                            .color(theme::TEXT_SECONDARY)
                            .small(),
                    );
                } else if ui
                    .button(RichText::new("New chat").color(theme::TEXT_SECONDARY))
                    .clicked()
                {
                    self.shell.confirm_reset = true;
                }
            });
        });
    }
}

impl eframe::App for WidgetApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            theme::apply_theme(ctx);
            self.first_frame = false;
        }

        if self.shell.process_events(self.event_bus.drain()) {
            ctx.request_repaint();
        }
        if self.controller.borrow().is_in_flight() {
            ctx.request_repaint();
        }

        if !self.controller.borrow().is_open() {
            egui::Area::new(egui::Id::new("chat_launcher"))
                .anchor(Align2::RIGHT_BOTTOM, ANCHOR_MARGIN)
                .show(ctx, |ui| {
                    let launcher = egui::Button::new(
                        RichText::new("Chat").color(theme::BG_PRIMARY).strong(),
                    )
                    .fill(theme::ACCENT)
                    .corner_radius(theme::PANEL_ROUNDING)
                    .min_size(Vec2::new(64.0, 36.0));
                    if ui.add(launcher).clicked() {
                        self.controller.borrow_mut().open();
                        self.dispatch_activate(ctx);
                    }
                });
            return;
        }

        egui::Window::new("chat_widget")
            .title_bar(false)
            .resizable(false)
            .anchor(Align2::RIGHT_BOTTOM, ANCHOR_MARGIN)
            .fixed_size(WINDOW_SIZE)
            .show(ctx, |ui| {
                self.header(ui, ctx);
                ui.separator();

                let send_text;
                let mut submit = false;
                {
                    let mut ctrl = self.controller.borrow_mut();
                    send_text = chat::chat_panel(ui, &ctrl, &mut self.shell);
                    let in_flight = ctrl.is_in_flight();
                    match ctrl.surface_mut() {
                        InputSurface::Text => {}
                        InputSurface::ServiceSelect(surface) => {
                            submit = service_select::service_select_panel(ui, surface, in_flight);
                        }
                        InputSurface::DateTimePicker(surface) => {
                            submit =
                                datetime_picker::datetime_picker_panel(ui, surface, in_flight);
                        }
                        InputSurface::ContactForm(surface) => {
                            submit = contact_form::contact_form_panel(ui, surface, in_flight);
                        }
                    }
                }

                if let Some(text) = send_text {
                    self.dispatch_send(text, ctx);
                }
                if submit {
                    self.dispatch_submit(ctx);
                }
            });
    }
}
