use super::{QueryForm, ValidationError};
use crate::lookup::{EntityKind, QuerySubmission};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Stage {
    #[default]
    Kind,
    Identifier,
    Secondary,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Step {
    Next,
    /// The same field is asked again.
    Invalid(String),
    Submitted(QuerySubmission),
}

/// An empty line keeps the current value of a field.
#[derive(Debug, Default)]
pub struct FormPrompt {
    stage: Stage,
}

impl FormPrompt {
    pub fn new() -> Self {
        FormPrompt::default()
    }

    pub fn prompt(&self, form: &QueryForm) -> String {
        match self.stage {
            Stage::Kind => format!("kind (user/repo) [{}]: ", form.kind()),
            Stage::Identifier => field_prompt(EntityKind::User.as_str(), form.identifier()),
            Stage::Secondary => field_prompt(EntityKind::Repo.as_str(), form.secondary_identifier()),
        }
    }

    pub fn feed(&mut self, form: &mut QueryForm, line: &str) -> Step {
        let value = line.trim();

        match self.stage {
            Stage::Kind => {
                if !value.is_empty() {
                    match value.parse::<EntityKind>() {
                        Ok(kind) => form.set_kind(kind),
                        Err(err) => return Step::Invalid(err.to_string()),
                    }
                }
                self.stage = Stage::Identifier;
                Step::Next
            }
            Stage::Identifier => {
                if !value.is_empty() {
                    form.set_identifier(value);
                }
                if form.identifier().trim().is_empty() {
                    return Step::Invalid(ValidationError::MissingIdentifier.to_string());
                }
                if form.secondary_enabled() {
                    self.stage = Stage::Secondary;
                    Step::Next
                } else {
                    self.submit(form)
                }
            }
            Stage::Secondary => {
                if !value.is_empty() {
                    form.set_secondary_identifier(value);
                }
                self.submit(form)
            }
        }
    }

    fn submit(&mut self, form: &QueryForm) -> Step {
        match form.submit() {
            Ok(submission) => {
                self.stage = Stage::Kind;
                Step::Submitted(submission)
            }
            Err(err) => Step::Invalid(err.to_string()),
        }
    }
}

fn field_prompt(label: &str, current: &str) -> String {
    if current.is_empty() {
        format!("{}: ", label)
    } else {
        format!("{} [{}]: ", label, current)
    }
}
