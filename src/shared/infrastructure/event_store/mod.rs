// Event store port: the journal the registry appends its domain events to.
//
// Purpose
// - Keep the registry independent of where events are kept.
//
// Boundaries
// - No concrete storage here. The in memory adapter lives in `in_memory`.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EventStoreError {
    #[error("version mismatch: expected {expected}, actual {actual}")]
    VersionMismatch { expected: i64, actual: i64 },

    #[error("backend error: {0}")]
    Backend(String),
}

#[derive(Debug, Clone)]
pub struct LoadedStream<E> {
    pub events: Vec<E>,
    pub version: i64,
}

pub trait EventStore<Event: Clone> {
    fn load(&self, stream_id: &str) -> Result<LoadedStream<Event>, EventStoreError>;
    fn append(
        &mut self,
        stream_id: &str,
        expected_version: i64,
        new_events: &[Event],
    ) -> Result<(), EventStoreError>;
}

pub mod in_memory;
