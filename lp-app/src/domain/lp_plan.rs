use super::{DraftSections, RevisedSections};
use serde::{Deserialize, Serialize};

/// HTML fragments returned to the caller of `/generate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LpPlan {
    pub comparison: String,
    pub appeal_point: String,
    pub lp_structure: String,
}

impl LpPlan {
    pub fn new(comparison: String, appeal_point: String, lp_structure: String) -> Self {
        Self {
            comparison,
            appeal_point,
            lp_structure,
        }
    }

    /// Comparison comes from the draft, appeal and structure from the revision.
    pub fn from_sections(draft: DraftSections, revised: RevisedSections) -> Self {
        Self::new(
            format!("<p>{}</p>", draft.comparison),
            format!("<p>{}</p>", revised.appeal_point),
            revised.structure_html,
        )
    }
}
