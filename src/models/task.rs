use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A task embedded in its owner's user document.
///
/// The title is unique within the owning user (exact, case-sensitive match);
/// that is the only constraint the application enforces. Status and priority
/// are free-form strings, and the deadline travels as an RFC 3339 timestamp
/// through both the API and the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Task {
    /// Must be between 1 and 200 characters.
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    /// Maximum length of 1000 characters.
    #[validate(length(max = 1000))]
    pub description: String,
    pub status: String,
    pub priority: String,
    pub deadline: DateTime<Utc>,
}
