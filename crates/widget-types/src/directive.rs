use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A bookable service offered by the business.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceOption {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceSelectConfig {
    pub services: Vec<ServiceOption>,
    #[serde(default)]
    pub multi_select: bool,
}

/// One offered appointment slot. `date` is `YYYY-MM-DD`, `time` is `HH:MM`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeSlot {
    pub id: String,
    pub date: String,
    pub time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub staff_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DateTimePickerConfig {
    #[serde(default)]
    pub min_date: String,
    pub slots: Vec<TimeSlot>,
}

impl DateTimePickerConfig {
    /// Distinct slot dates in ascending order — the selectable date domain.
    pub fn dates(&self) -> Vec<String> {
        let mut dates: Vec<String> = self.slots.iter().map(|s| s.date.clone()).collect();
        dates.sort();
        dates.dedup();
        dates
    }

    /// Default displayed date: earliest slot date, else `min_date`.
    pub fn default_date(&self) -> String {
        self.dates()
            .into_iter()
            .next()
            .unwrap_or_else(|| self.min_date.clone())
    }

    pub fn slots_on<'a>(&'a self, date: &str) -> Vec<&'a TimeSlot> {
        self.slots.iter().filter(|s| s.date == date).collect()
    }

    pub fn slot_by_id(&self, id: &str) -> Option<&TimeSlot> {
        self.slots.iter().find(|s| s.id == id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Phone,
    Email,
}

impl ContactField {
    pub fn label(&self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Phone => "Phone",
            ContactField::Email => "Email",
        }
    }

    /// Encoding order is fixed regardless of the order the server sent.
    pub fn all() -> &'static [ContactField] {
        &[ContactField::Name, ContactField::Phone, ContactField::Email]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactFormConfig {
    #[serde(default)]
    pub fields: Vec<ContactField>,
}

impl ContactFormConfig {
    /// Fields to render. An absent or empty list falls back to all three
    /// so the form can never render unsubmittable.
    pub fn rendered_fields(&self) -> Vec<ContactField> {
        if self.fields.is_empty() {
            ContactField::all().to_vec()
        } else {
            self.fields.clone()
        }
    }
}

/// A server instruction for which structured surface to show next.
///
/// Transient: consumed by exactly one activation of the input state
/// machine. `text` directives (and anything unrecognized or malformed)
/// carry no payload and are represented by the absence of a directive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum InputDirective {
    ServiceSelect(ServiceSelectConfig),
    DateTimePicker(DateTimePickerConfig),
    ContactForm(ContactFormConfig),
}

impl InputDirective {
    /// Parse the `input_type` / `input_config` pair from a post-message
    /// response. Unknown types and malformed configs yield `None`, which
    /// the state machine treats as `text` — the server contract may
    /// evolve ahead of the client.
    pub fn from_wire(input_type: Option<&str>, input_config: Option<&Value>) -> Option<Self> {
        let config = input_config?;
        match input_type? {
            "service_select" => serde_json::from_value(config.clone())
                .ok()
                .map(InputDirective::ServiceSelect),
            "datetime_picker" => serde_json::from_value(config.clone())
                .ok()
                .map(InputDirective::DateTimePicker),
            "contact_form" => serde_json::from_value(config.clone())
                .ok()
                .map(InputDirective::ContactForm),
            _ => None,
        }
    }

    pub fn input_type(&self) -> &'static str {
        match self {
            InputDirective::ServiceSelect(_) => "service_select",
            InputDirective::DateTimePicker(_) => "datetime_picker",
            InputDirective::ContactForm(_) => "contact_form",
        }
    }
}
