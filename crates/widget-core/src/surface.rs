//! Structured input state machine.
//!
//! One input modality is addressable at a time: free text, or one of
//! three constrained surfaces the server can activate through an input
//! directive. Every surface carries its own pending selection, which is
//! discarded when a new directive arrives and cleared on submit.

use widget_types::directive::{
    ContactField, ContactFormConfig, DateTimePickerConfig, InputDirective, ServiceOption,
    ServiceSelectConfig, TimeSlot,
};

use crate::encode;

pub enum InputSurface {
    Text,
    ServiceSelect(ServiceSelectSurface),
    DateTimePicker(DateTimePickerSurface),
    ContactForm(ContactFormSurface),
}

impl InputSurface {
    /// Activate the surface a directive asks for. `None` — the absence
    /// of a directive, an unrecognized type, or a malformed config —
    /// falls back to text input.
    pub fn from_directive(directive: Option<InputDirective>) -> Self {
        match directive {
            Some(InputDirective::ServiceSelect(c)) => {
                InputSurface::ServiceSelect(ServiceSelectSurface::new(c))
            }
            Some(InputDirective::DateTimePicker(c)) => {
                InputSurface::DateTimePicker(DateTimePickerSurface::new(c))
            }
            Some(InputDirective::ContactForm(c)) => {
                InputSurface::ContactForm(ContactFormSurface::new(c))
            }
            None => InputSurface::Text,
        }
    }

    pub fn input_type(&self) -> &'static str {
        match self {
            InputSurface::Text => "text",
            InputSurface::ServiceSelect(_) => "service_select",
            InputSurface::DateTimePicker(_) => "datetime_picker",
            InputSurface::ContactForm(_) => "contact_form",
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, InputSurface::Text)
    }

    /// Whether the pending selection meets the surface's minimal
    /// validity. Always false for text (typed input has its own path).
    pub fn can_submit(&self) -> bool {
        match self {
            InputSurface::Text => false,
            InputSurface::ServiceSelect(s) => s.can_submit(),
            InputSurface::DateTimePicker(s) => s.can_submit(),
            InputSurface::ContactForm(s) => s.can_submit(),
        }
    }

    /// Synthesize the outbound message for the pending selection, or
    /// `None` when the selection is not submittable.
    pub fn encode_selection(&self) -> Option<String> {
        match self {
            InputSurface::Text => None,
            InputSurface::ServiceSelect(s) => s.encode(),
            InputSurface::DateTimePicker(s) => s.encode(),
            InputSurface::ContactForm(s) => s.encode(),
        }
    }
}

// ─── Service selection ───────────────────────────────────────

pub struct ServiceSelectSurface {
    pub config: ServiceSelectConfig,
    /// Selected service ids in the order the user picked them.
    selected: Vec<String>,
}

impl ServiceSelectSurface {
    pub fn new(config: ServiceSelectConfig) -> Self {
        Self {
            config,
            selected: Vec::new(),
        }
    }

    /// Multi-select toggles; single-select behaves as radio (picking a
    /// new service replaces the previous one).
    pub fn toggle(&mut self, id: &str) {
        if self.config.multi_select {
            if let Some(pos) = self.selected.iter().position(|s| s == id) {
                self.selected.remove(pos);
            } else {
                self.selected.push(id.to_string());
            }
        } else {
            self.selected = vec![id.to_string()];
        }
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.iter().any(|s| s == id)
    }

    /// The chosen services, in selection order.
    pub fn selected_services(&self) -> Vec<&ServiceOption> {
        self.selected
            .iter()
            .filter_map(|id| self.config.services.iter().find(|s| &s.id == id))
            .collect()
    }

    pub fn can_submit(&self) -> bool {
        !self.selected.is_empty()
    }

    pub fn encode(&self) -> Option<String> {
        let services = self.selected_services();
        if services.is_empty() {
            return None;
        }
        Some(encode::service_selection(&services))
    }
}

// ─── Date/time picker ────────────────────────────────────────

pub struct DateTimePickerSurface {
    pub config: DateTimePickerConfig,
    active_date: String,
    selected_slot: Option<String>,
}

impl DateTimePickerSurface {
    pub fn new(config: DateTimePickerConfig) -> Self {
        let active_date = config.default_date();
        Self {
            config,
            active_date,
            selected_slot: None,
        }
    }

    pub fn active_date(&self) -> &str {
        &self.active_date
    }

    /// Switching the date re-filters the slot list and clears any slot
    /// already chosen, disabling submission until a new pick.
    pub fn select_date(&mut self, date: &str) {
        if date != self.active_date {
            self.active_date = date.to_string();
            self.selected_slot = None;
        }
    }

    /// Slots offered on the active date. May be empty — the renderer
    /// shows an explicit empty state, not a blank list.
    pub fn visible_slots(&self) -> Vec<&TimeSlot> {
        self.config.slots_on(&self.active_date)
    }

    pub fn select_slot(&mut self, id: &str) {
        // Only slots on the active date are addressable.
        if self
            .config
            .slot_by_id(id)
            .is_some_and(|s| s.date == self.active_date)
        {
            self.selected_slot = Some(id.to_string());
        }
    }

    pub fn selected_slot(&self) -> Option<&str> {
        self.selected_slot.as_deref()
    }

    pub fn can_submit(&self) -> bool {
        self.selected_slot.is_some()
    }

    pub fn encode(&self) -> Option<String> {
        let id = self.selected_slot.as_deref()?;
        self.config.slot_by_id(id).map(encode::slot_selection)
    }
}

// ─── Contact form ────────────────────────────────────────────

pub struct ContactFormSurface {
    rendered: Vec<ContactField>,
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl ContactFormSurface {
    pub fn new(config: ContactFormConfig) -> Self {
        Self {
            rendered: config.rendered_fields(),
            name: String::new(),
            phone: String::new(),
            email: String::new(),
        }
    }

    pub fn rendered_fields(&self) -> &[ContactField] {
        &self.rendered
    }

    pub fn value_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Phone => &mut self.phone,
            ContactField::Email => &mut self.email,
        }
    }

    /// At least one rendered field must hold non-whitespace content.
    pub fn can_submit(&self) -> bool {
        self.rendered.iter().any(|f| {
            let value = match f {
                ContactField::Name => &self.name,
                ContactField::Phone => &self.phone,
                ContactField::Email => &self.email,
            };
            !value.trim().is_empty()
        })
    }

    pub fn encode(&self) -> Option<String> {
        if !self.can_submit() {
            return None;
        }
        Some(encode::contact_details(
            &self.rendered,
            &self.name,
            &self.phone,
            &self.email,
        ))
    }
}
