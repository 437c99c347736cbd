pub mod prompt;

use crate::lookup::{EntityKind, QuerySubmission};
use thiserror::Error;

pub use prompt::{FormPrompt, Step};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("user is required")]
    MissingIdentifier,
    #[error("repo is required")]
    MissingSecondaryIdentifier,
}

/// Editable state behind the lookup form.
///
/// The secondary identifier (repository name) only takes part in a
/// submission when the kind is [`EntityKind::Repo`]. Its value survives
/// toggling the kind back and forth.
#[derive(Debug, Default, Clone)]
pub struct QueryForm {
    kind: EntityKind,
    identifier: String,
    secondary_identifier: String,
}

impl QueryForm {
    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn secondary_identifier(&self) -> &str {
        &self.secondary_identifier
    }

    pub fn set_kind(&mut self, kind: EntityKind) {
        self.kind = kind;
    }

    pub fn set_identifier(&mut self, identifier: impl Into<String>) {
        self.identifier = identifier.into();
    }

    pub fn set_secondary_identifier(&mut self, secondary_identifier: impl Into<String>) {
        self.secondary_identifier = secondary_identifier.into();
    }

    pub fn secondary_enabled(&self) -> bool {
        self.kind == EntityKind::Repo
    }

    pub fn secondary_required(&self) -> bool {
        self.secondary_enabled()
    }

    pub fn submit(&self) -> Result<QuerySubmission, ValidationError> {
        let identifier = self.identifier.trim();
        if identifier.is_empty() {
            return Err(ValidationError::MissingIdentifier);
        }

        if !self.secondary_enabled() {
            return Ok(QuerySubmission::user(identifier));
        }

        let secondary_identifier = self.secondary_identifier.trim();
        if self.secondary_required() && secondary_identifier.is_empty() {
            return Err(ValidationError::MissingSecondaryIdentifier);
        }

        Ok(QuerySubmission::repo(identifier, secondary_identifier))
    }
}
