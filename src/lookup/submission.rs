use super::kind::EntityKind;

/// Normalized values produced when the form is submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuerySubmission {
    pub identifier: String,
    pub secondary_identifier: String,
    pub kind: EntityKind,
}

impl QuerySubmission {
    pub fn user(identifier: impl Into<String>) -> Self {
        QuerySubmission {
            identifier: identifier.into(),
            secondary_identifier: String::new(),
            kind: EntityKind::User,
        }
    }

    pub fn repo(owner: impl Into<String>, name: impl Into<String>) -> Self {
        QuerySubmission {
            identifier: owner.into(),
            secondary_identifier: name.into(),
            kind: EntityKind::Repo,
        }
    }
}
