// In memory implementation of the EventStore port.
//
// Responsibilities
// - Store events per stream in memory.
// - Enforce optimistic concurrency by checking the expected version.

use crate::shared::infrastructure::event_store::{EventStore, EventStoreError, LoadedStream};
use std::collections::HashMap;

pub struct InMemoryEventStore<Event: Clone> {
    inner: HashMap<String, Vec<Event>>,
    is_offline: bool,
}

impl<Event: Clone> Default for InMemoryEventStore<Event> {
    fn default() -> Self {
        Self {
            inner: HashMap::new(),
            is_offline: false,
        }
    }
}

impl<Event: Clone> InMemoryEventStore<Event> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }
}

impl<Event: Clone> EventStore<Event> for InMemoryEventStore<Event> {
    fn load(&self, stream_id: &str) -> Result<LoadedStream<Event>, EventStoreError> {
        if self.is_offline {
            return Err(EventStoreError::Backend("Event store offline".into()));
        }
        let events = self.inner.get(stream_id).cloned().unwrap_or_default();
        let version = events.len() as i64;
        Ok(LoadedStream { events, version })
    }

    fn append(
        &mut self,
        stream_id: &str,
        expected_version: i64,
        new_events: &[Event],
    ) -> Result<(), EventStoreError> {
        if self.is_offline {
            return Err(EventStoreError::Backend("Event store offline".into()));
        }
        let entry = self.inner.entry(stream_id.to_string()).or_default();
        let actual = entry.len() as i64;
        if actual != expected_version {
            return Err(EventStoreError::VersionMismatch {
                expected: expected_version,
                actual,
            });
        }
        entry.extend_from_slice(new_events);
        Ok(())
    }
}
