use serde::{Deserialize, Serialize};

/// Sections pulled out of the first LLM response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftSections {
    pub comparison: String,
    pub appeal_point: String,
    pub structure_html: String,
}

/// Sections pulled out of the revision response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevisedSections {
    pub appeal_point: String,
    pub structure_html: String,
}
