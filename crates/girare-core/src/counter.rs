//! Click-counter widget state.
//!
//! Backs the counter cards on the page: a labelled non-negative count with
//! a serializable payload for the (simulated) backend save call.

use serde::{Deserialize, Serialize};

/// State for one counter card.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Counter {
    /// Card heading, used as the save parameter name.
    label: String,
    /// Current count. Never goes below zero.
    value: u32,
}

/// Body of the simulated backend save call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavePayload {
    /// Which counter is being saved.
    pub label: String,
    /// Count at the time of the save.
    pub value: u32,
}

impl Counter {
    /// Create a counter starting at zero.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: 0,
        }
    }

    /// Get the card label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Get the current count.
    pub const fn value(&self) -> u32 {
        self.value
    }

    /// Increase the count by one.
    pub fn increment(&mut self) {
        self.value += 1;
    }

    /// Decrease the count by one, flooring at zero.
    pub fn decrement(&mut self) {
        self.value = self.value.saturating_sub(1);
    }

    /// Build the payload for a save of the current count.
    pub fn save_payload(&self) -> SavePayload {
        SavePayload {
            label: self.label.clone(),
            value: self.value,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_counter_starts_at_zero() {
        let c = Counter::new("Clicks");
        assert_eq!(c.label(), "Clicks");
        assert_eq!(c.value(), 0);
    }

    #[test]
    fn test_counter_increment() {
        let mut c = Counter::new("Clicks");
        c.increment();
        c.increment();
        assert_eq!(c.value(), 2);
    }

    #[test]
    fn test_counter_decrement() {
        let mut c = Counter::new("Clicks");
        c.increment();
        c.increment();
        c.decrement();
        assert_eq!(c.value(), 1);
    }

    #[test]
    fn test_counter_decrement_floors_at_zero() {
        let mut c = Counter::new("Clicks");
        c.decrement();
        assert_eq!(c.value(), 0);
        c.increment();
        c.decrement();
        c.decrement();
        assert_eq!(c.value(), 0);
    }

    #[test]
    fn test_counter_default_is_empty() {
        let c = Counter::default();
        assert_eq!(c.label(), "");
        assert_eq!(c.value(), 0);
    }

    #[test]
    fn test_save_payload_captures_state() {
        let mut c = Counter::new("Signups");
        c.increment();
        c.increment();
        c.increment();
        let payload = c.save_payload();
        assert_eq!(payload.label, "Signups");
        assert_eq!(payload.value, 3);
    }

    #[test]
    fn test_save_payload_json_shape() {
        let mut c = Counter::new("Visits");
        c.increment();
        let json = serde_json::to_string(&c.save_payload()).unwrap();
        assert_eq!(json, r#"{"label":"Visits","value":1}"#);
    }

    #[test]
    fn test_counter_serialization_round_trip() {
        let mut c = Counter::new("Clicks");
        c.increment();
        let json = serde_json::to_string(&c).unwrap();
        let back: Counter = serde_json::from_str(&json).unwrap();
        assert_eq!(back.label(), "Clicks");
        assert_eq!(back.value(), 1);
    }
}
