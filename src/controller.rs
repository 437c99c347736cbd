use crate::{
    http,
    lookup::{EntityKind, LookupRequest, LookupResult, QuerySubmission},
};
use std::fmt::Display;
use thiserror::Error;
use url::Url;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("base url {0} cannot carry a path")]
pub struct InvalidBaseUrl(pub Url);

/// One-shot message raised when a lookup fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: Option<String>,
}

impl Display for Notification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "error: {}",
            self.message.as_deref().unwrap_or("request failed")
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    NoQueryYet,
    Pending { request: LookupRequest },
    Resolved,
    Failed { notification: Notification },
}

#[derive(Debug, PartialEq, Eq)]
pub enum Completion {
    Applied,
    Failed,
    Stale,
}

pub struct Controller {
    base: Url,
    phase: Phase,
    result: Option<LookupResult>,
    latest_seq: u64,
}

impl Controller {
    pub fn new(base: Url) -> Result<Self, InvalidBaseUrl> {
        if base.cannot_be_a_base() {
            return Err(InvalidBaseUrl(base));
        }

        Ok(Controller {
            base,
            phase: Phase::NoQueryYet,
            result: None,
            latest_seq: 0,
        })
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn result(&self) -> Option<&LookupResult> {
        self.result.as_ref()
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.phase, Phase::Pending { .. })
    }

    /// In-flight requests are not cancelled, their completions become stale.
    pub fn submit(
        &mut self,
        submission: QuerySubmission,
    ) -> Result<LookupRequest, InvalidBaseUrl> {
        let url = build_url(&self.base, &submission)?;

        self.latest_seq += 1;
        let request = LookupRequest::new(self.latest_seq, submission.kind, url);
        log::debug!("submitted {} #{}: {}", request.kind, request.seq, request.url);

        self.phase = Phase::Pending {
            request: request.clone(),
        };

        Ok(request)
    }

    pub fn complete(
        &mut self,
        seq: u64,
        outcome: Result<LookupResult, http::Error>,
    ) -> Completion {
        if seq != self.latest_seq || !self.is_pending() {
            log::debug!(
                "discarding result of #{}, latest request is #{}",
                seq,
                self.latest_seq
            );
            return Completion::Stale;
        }

        match outcome {
            Ok(result) => {
                self.result = Some(result);
                self.phase = Phase::Resolved;
                Completion::Applied
            }
            Err(err) => {
                log::warn!("lookup #{} failed: {}", seq, err.chain());
                self.phase = Phase::Failed {
                    notification: Notification {
                        message: err.server_message().map(str::to_owned),
                    },
                };
                Completion::Failed
            }
        }
    }
}

/// `{base}/users/{identifier}` or `{base}/repos/{identifier}/{secondary}`.
pub fn build_url(base: &Url, submission: &QuerySubmission) -> Result<Url, InvalidBaseUrl> {
    let mut url = base.clone();

    {
        let mut segments = url
            .path_segments_mut()
            .map_err(|_| InvalidBaseUrl(base.clone()))?;
        segments.pop_if_empty();

        match submission.kind {
            EntityKind::User => {
                segments.extend(["users", submission.identifier.as_str()]);
            }
            EntityKind::Repo => {
                segments.extend([
                    "repos",
                    submission.identifier.as_str(),
                    submission.secondary_identifier.as_str(),
                ]);
            }
        }
    }

    Ok(url)
}
