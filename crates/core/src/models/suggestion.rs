use serde::{Deserialize, Serialize};

use super::de;

/// Envelope for `GET /ai/suggest`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SuggestionResponse {
    #[serde(default, deserialize_with = "de::null_default")]
    pub suggestion: String,
}
