//! Message encoding grammar.
//!
//! Turns a structured selection into the single free-form message the
//! remote agent pattern-matches on. The `[key:value]` bracket tag is the
//! only part the agent machine-reads; the prose before it exists for
//! transcript readability. These strings are a wire contract — changing
//! them requires a coordinated change to the agent's parser.

use chrono::{NaiveDate, NaiveTime};
use widget_types::directive::{ContactField, ServiceOption, TimeSlot};

/// `I'd like to book: Haircut, Beard Trim [service_id:s1,s2]`
///
/// Names and ids keep the user's selection order.
pub fn service_selection(selected: &[&ServiceOption]) -> String {
    let names: Vec<&str> = selected.iter().map(|s| s.name.as_str()).collect();
    let ids: Vec<&str> = selected.iter().map(|s| s.id.as_str()).collect();
    format!(
        "I'd like to book: {} [service_id:{}]",
        names.join(", "),
        ids.join(",")
    )
}

/// `I'd like to book for Monday, June 10 at 2:00 PM [slot:a1]`
///
/// Formatted from the slot's own date and time, never today's.
pub fn slot_selection(slot: &TimeSlot) -> String {
    format!(
        "I'd like to book for {} at {} [slot:{}]",
        long_date(&slot.date),
        twelve_hour_time(&slot.time),
        slot.id
    )
}

/// `Name: Jane, Phone: 555-1212` — fixed field order, empty fields
/// skipped, no bracket tag (nothing to round-trip).
pub fn contact_details(rendered: &[ContactField], name: &str, phone: &str, email: &str) -> String {
    let mut parts = Vec::new();
    for field in ContactField::all() {
        if !rendered.contains(field) {
            continue;
        }
        let value = match field {
            ContactField::Name => name,
            ContactField::Phone => phone,
            ContactField::Email => email,
        }
        .trim();
        if value.is_empty() {
            continue;
        }
        parts.push(format!("{}: {}", field.label(), value));
    }
    parts.join(", ")
}

/// `2024-06-10` → `Monday, June 10`. An unparseable date falls back to
/// the raw string; the bracket tag still carries the slot id.
pub fn long_date(date: &str) -> String {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map(|d| d.format("%A, %B %-d").to_string())
        .unwrap_or_else(|_| date.to_string())
}

/// `14:00` → `2:00 PM`, with the same raw-string fallback.
pub fn twelve_hour_time(time: &str) -> String {
    NaiveTime::parse_from_str(time, "%H:%M")
        .map(|t| t.format("%-I:%M %p").to_string())
        .unwrap_or_else(|_| time.to_string())
}
