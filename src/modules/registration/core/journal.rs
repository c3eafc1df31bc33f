// Journal entry: a domain event stamped with its identity and the moment it
// was recorded. This is the unit the registry appends to the event store.

use crate::modules::registration::core::events::RegistrationEvent;
use chrono::Utc;
use uuid::Uuid;

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq)]
pub struct JournalEntry {
    pub event_id: Uuid,
    /// Epoch milliseconds.
    pub recorded_at: i64,
    pub event: RegistrationEvent,
}

impl JournalEntry {
    pub fn record(event: RegistrationEvent) -> Self {
        Self {
            event_id: Uuid::now_v7(),
            recorded_at: Utc::now().timestamp_millis(),
            event,
        }
    }
}
