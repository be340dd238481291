//! Conversation controller — owns the transcript and drives the
//! transport through the input state machine.
//!
//! One long-lived turn loop:
//! 1. Shell opens → activate: rehydrate history, greet if empty
//! 2. User types text or fills a structured surface
//! 3. One outbound message is posted (in-flight guarded)
//! 4. The reply may carry a directive, activating the next surface
//!
//! The controller lives in an `Rc<RefCell<_>>` shared between the UI
//! frame loop and spawned futures. Async flows are associated functions
//! over `&RefCell<Self>` structured as short synchronous phases around
//! the awaited transport call, so no borrow is ever held across an
//! await and the UI stays responsive while a request is outstanding.

use std::cell::RefCell;
use std::rc::Rc;

use widget_types::{
    config::{WidgetConfig, FALLBACK_GREETING, SEND_FAILURE_REPLY},
    directive::InputDirective,
    event::WidgetEvent,
    message::ChatMessage,
    Result,
};

use crate::event_bus::EventBus;
use crate::ports::{AgentReply, ChatTransport, Greeting, SessionStore};
use crate::session::SessionManager;
use crate::surface::InputSurface;

/// A message ready to post, stamped with the session it belongs to.
/// Replies are matched against the stamp on arrival so a reset in the
/// guard window cannot smuggle a stale reply into the fresh session.
pub struct Outbound {
    pub business_id: String,
    pub session_id: String,
    pub text: String,
}

pub struct ChatController {
    pub config: WidgetConfig,
    session: SessionManager,
    session_id: String,
    transcript: Vec<ChatMessage>,
    surface: InputSurface,
    business_name: Option<String>,
    event_bus: EventBus,
    open: bool,
    in_flight: bool,
    history_requested: bool,
    greeting_requested: bool,
}

impl ChatController {
    pub fn new(config: WidgetConfig, store: Rc<dyn SessionStore>, event_bus: EventBus) -> Self {
        let session = SessionManager::new(store);
        let session_id = session.get_or_create(&config.business_id);
        Self {
            config,
            session,
            session_id,
            transcript: Vec::new(),
            surface: InputSurface::Text,
            business_name: None,
            event_bus,
            open: false,
            in_flight: false,
            history_requested: false,
            greeting_requested: false,
        }
    }

    // ─── Read accessors ──────────────────────────────────────

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    pub fn surface(&self) -> &InputSurface {
        &self.surface
    }

    /// Mutable access for the active surface's pending selection.
    pub fn surface_mut(&mut self) -> &mut InputSurface {
        &mut self.surface
    }

    /// Server-reported business name, else the configured title.
    pub fn display_name(&self) -> &str {
        self.business_name.as_deref().unwrap_or(&self.config.title)
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    // ─── Shell lifecycle ─────────────────────────────────────

    /// Opening never cancels an in-flight send; a reply that arrives
    /// while closed still lands in the (hidden) transcript.
    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    // ─── Synchronous protocol phases ─────────────────────────

    /// Claim the in-flight guard and append the user message. Returns
    /// `None` — the attempt is dropped, not queued — while another post
    /// is outstanding or when the text is blank.
    pub fn begin_send(&mut self, text: &str) -> Option<Outbound> {
        if self.in_flight {
            return None;
        }
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        self.in_flight = true;
        self.push_message(ChatMessage::user(text));
        Some(Outbound {
            business_id: self.config.business_id.clone(),
            session_id: self.session_id.clone(),
            text: text.to_string(),
        })
    }

    /// Submit the active structured surface: synthesize the message,
    /// clear the pending selection, return to text input, and claim the
    /// guard exactly as a typed send would. A rejected attempt (guard
    /// held, or nothing selected) leaves the surface untouched.
    pub fn begin_structured_submit(&mut self) -> Option<Outbound> {
        if self.in_flight {
            return None;
        }
        let text = self.surface.encode_selection()?;
        self.set_surface(InputSurface::Text);
        self.begin_send(&text)
    }

    /// Handle the post result. A reply stamped with a rotated-away
    /// session is discarded — the reset already cleared the guard.
    pub fn finish_send(&mut self, sent_session: &str, result: Result<AgentReply>) {
        if sent_session != self.session_id {
            log::info!("Dropping reply for rotated session {}", sent_session);
            return;
        }
        self.in_flight = false;
        match result {
            Ok(reply) => {
                self.push_message(ChatMessage::assistant(&reply.message));
                let directive = InputDirective::from_wire(
                    reply.input_type.as_deref(),
                    reply.input_config.as_ref(),
                );
                self.set_surface(InputSurface::from_directive(directive));
            }
            Err(e) => {
                log::warn!("Message post failed: {}", e);
                self.event_bus.emit(WidgetEvent::TransportFailed {
                    context: "post_message".to_string(),
                });
                self.push_message(ChatMessage::assistant(SEND_FAILURE_REPLY));
                self.set_surface(InputSurface::Text);
            }
        }
    }

    /// Rehydrate from server history: a non-empty list replaces the
    /// transcript wholesale; anything else (empty, error) leaves a
    /// fresh, empty conversation. Never fatal.
    pub fn apply_history(&mut self, sent_session: &str, result: Result<Vec<ChatMessage>>) {
        if sent_session != self.session_id {
            return;
        }
        match result {
            Ok(messages) if !messages.is_empty() => {
                let count = messages.len();
                self.transcript = messages;
                self.event_bus.emit(WidgetEvent::HistoryLoaded { count });
            }
            Ok(_) => self.transcript.clear(),
            Err(e) => {
                log::warn!("History fetch failed, starting fresh: {}", e);
                self.transcript.clear();
            }
        }
    }

    /// Handle the greeting result. A failure still greets — the user
    /// never sees a broken opening state.
    pub fn apply_greeting(&mut self, sent_session: &str, result: Result<Greeting>) {
        if sent_session != self.session_id {
            return;
        }
        match result {
            Ok(greeting) => {
                if let Some(name) = greeting.business_name {
                    self.event_bus
                        .emit(WidgetEvent::BusinessNameLoaded { name: name.clone() });
                    self.business_name = Some(name);
                }
                self.push_message(ChatMessage::assistant(&greeting.message));
            }
            Err(e) => {
                log::warn!("Greeting fetch failed, using fallback: {}", e);
                self.push_message(ChatMessage::assistant(FALLBACK_GREETING));
            }
        }
        self.event_bus.emit(WidgetEvent::GreetingLoaded);
    }

    /// Client-side half of a reset: rotate the session id wholesale,
    /// clear the transcript, and return to text input. Runs regardless
    /// of whether the server-side delete succeeded.
    pub fn apply_reset(&mut self) {
        self.session_id = self.session.rotate(&self.config.business_id);
        self.transcript.clear();
        self.surface = InputSurface::Text;
        self.in_flight = false;
        // The fresh session has no server history to fetch.
        self.history_requested = true;
        self.greeting_requested = false;
        self.event_bus.emit(WidgetEvent::SessionReset);
    }

    fn push_message(&mut self, message: ChatMessage) {
        self.event_bus
            .emit(WidgetEvent::MessageAppended { role: message.role });
        self.transcript.push(message);
    }

    fn set_surface(&mut self, surface: InputSurface) {
        self.event_bus.emit(WidgetEvent::SurfaceChanged {
            input_type: surface.input_type().to_string(),
        });
        self.surface = surface;
    }

    // ─── Async flows ─────────────────────────────────────────
    //
    // Associated functions over `&RefCell<Self>`: every borrow is
    // released before the transport await.

    /// On open: rehydrate history once per session, then fetch the
    /// greeting if the transcript is still empty (also once).
    pub async fn activate(ctrl: &RefCell<Self>, transport: &dyn ChatTransport) {
        let history = {
            let mut c = ctrl.borrow_mut();
            if c.history_requested {
                None
            } else {
                c.history_requested = true;
                Some((c.config.business_id.clone(), c.session_id.clone()))
            }
        };
        if let Some((business_id, session_id)) = history {
            let result = transport.fetch_history(&business_id, &session_id).await;
            ctrl.borrow_mut().apply_history(&session_id, result);
        }

        let greeting = {
            let mut c = ctrl.borrow_mut();
            if c.open && c.transcript.is_empty() && !c.greeting_requested {
                c.greeting_requested = true;
                Some((c.config.business_id.clone(), c.session_id.clone()))
            } else {
                None
            }
        };
        if let Some((business_id, session_id)) = greeting {
            let result = transport.fetch_greeting(&business_id, &session_id).await;
            ctrl.borrow_mut().apply_greeting(&session_id, result);
        }
    }

    /// Post typed text. A second call while one post is outstanding is
    /// a no-op.
    pub async fn send(ctrl: &RefCell<Self>, transport: &dyn ChatTransport, text: &str) {
        let outbound = ctrl.borrow_mut().begin_send(text);
        Self::post(ctrl, transport, outbound).await;
    }

    /// Post the active surface's selection through the same path as
    /// typed text — the agent never distinguishes the origin.
    pub async fn submit_selection(ctrl: &RefCell<Self>, transport: &dyn ChatTransport) {
        let outbound = ctrl.borrow_mut().begin_structured_submit();
        Self::post(ctrl, transport, outbound).await;
    }

    async fn post(ctrl: &RefCell<Self>, transport: &dyn ChatTransport, outbound: Option<Outbound>) {
        let Some(out) = outbound else { return };
        let result = transport
            .post_message(&out.business_id, &out.session_id, &out.text)
            .await;
        ctrl.borrow_mut().finish_send(&out.session_id, result);
    }

    /// Reset the conversation: best-effort server delete, then
    /// unconditional client-side rotation and a fresh greeting.
    pub async fn reset(ctrl: &RefCell<Self>, transport: &dyn ChatTransport) {
        let (business_id, session_id) = {
            let c = ctrl.borrow();
            (c.config.business_id.clone(), c.session_id.clone())
        };
        if let Err(e) = transport.delete_session(&business_id, &session_id).await {
            log::warn!("Session delete failed (rotating anyway): {}", e);
        }
        ctrl.borrow_mut().apply_reset();
        Self::activate(ctrl, transport).await;
    }
}
