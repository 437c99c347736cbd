use super::kind::EntityKind;
use url::Url;

/// A fetch issued by the controller. `seq` orders requests so that a
/// completion can be checked against the most recent submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub seq: u64,
    pub kind: EntityKind,
    pub url: Url,
}

impl LookupRequest {
    pub fn new(seq: u64, kind: EntityKind, url: Url) -> Self {
        LookupRequest { seq, kind, url }
    }
}
