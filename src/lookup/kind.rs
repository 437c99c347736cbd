use std::{fmt::Display, str::FromStr};
use thiserror::Error;

/// Which remote resource, and which response schema, a query targets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EntityKind {
    #[default]
    User,
    Repo,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::User => "user",
            EntityKind::Repo => "repo",
        }
    }
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown kind `{0}`, expected `user` or `repo`")]
pub struct UnknownKind(pub String);

impl FromStr for EntityKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "user" => Ok(EntityKind::User),
            "repo" | "repository" => Ok(EntityKind::Repo),
            _ => Err(UnknownKind(s.trim().to_owned())),
        }
    }
}
