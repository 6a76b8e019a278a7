use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One recorded drink: a volume at a point in time.
///
/// Immutable once created; removed only by explicit deletion or the
/// daily reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrinkEntry {
    /// Opaque unique identifier.
    pub id: String,
    /// Amount of water drunk in milliliters.
    #[serde(rename = "amount")]
    pub amount_ml: u32,
    /// When the drink was recorded.
    pub time: DateTime<Utc>,
}

impl DrinkEntry {
    /// Create an entry stamped with the current time.
    pub fn new(amount_ml: u32) -> Self {
        let now = Utc::now();
        Self {
            id: format!("drink-{}-{}", now.timestamp_millis(), Uuid::new_v4()),
            amount_ml,
            time: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        let a = DrinkEntry::new(250);
        let b = DrinkEntry::new(250);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn wire_format_uses_amount_field() {
        let entry = DrinkEntry::new(250);
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["amount"], 250);
        assert!(json["time"].as_str().unwrap().contains('T'));
    }
}
