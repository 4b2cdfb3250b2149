// Core structs: JobListing, ListingHandle; one error enum per subsystem
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One extracted job posting. Fields that could not be read stay empty;
/// none of them is ever absent in the serialized output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobListing {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub requirements: String,
}

/// Opaque reference to one rendered listing element. Valid only for the
/// page state it was enumerated from; further load-more clicks invalidate
/// every previously obtained handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingHandle {
    pub(crate) node_id: u32,
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("browser launch failed: {0}")]
    Launch(String),
    #[error("could not open tab: {0}")]
    OpenTab(String),
}

#[derive(Debug, Error)]
pub enum PageError {
    #[error("navigation to {url} failed: {reason}")]
    Navigation { url: String, reason: String },
    #[error("listing container `{selector}` not found on {url}")]
    ContentNotFound { url: String, selector: String },
}

#[derive(Debug, Error)]
pub enum ElementError {
    #[error("element interaction failed: {0}")]
    Interaction(String),
    #[error("element read failed: {0}")]
    Read(String),
}

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("could not serialize records: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("could not write output: {0}")]
    Io(#[from] std::io::Error),
}
