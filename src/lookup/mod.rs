pub mod client;
pub mod kind;
pub mod request;
pub mod result;
pub mod submission;

pub use client::LookupClient;
pub use kind::EntityKind;
pub use request::LookupRequest;
pub use result::LookupResult;
pub use submission::QuerySubmission;
