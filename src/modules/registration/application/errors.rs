use crate::modules::registration::core::errors::RegistrationError;
use crate::shared::infrastructure::event_store::EventStoreError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] RegistrationError),

    #[error(transparent)]
    EventStore(#[from] EventStoreError),
}

impl ApplicationError {
    /// The domain rejection behind this error, if any.
    pub fn as_domain(&self) -> Option<&RegistrationError> {
        match self {
            ApplicationError::Domain(error) => Some(error),
            ApplicationError::EventStore(_) => None,
        }
    }
}
