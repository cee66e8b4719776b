mod generate_lp;
mod section_extractor;
mod summarize_competitor;

pub use generate_lp::GenerateLp;
pub use section_extractor::{
    extract_draft, extract_revision, APPEAL_FAILED, COMPARISON_FAILED, REVISED_APPEAL_FAILED,
    REVISED_STRUCTURE_FAILED, STRUCTURE_FAILED,
};
pub use summarize_competitor::{CompetitorSummarizer, NO_COMPETITOR_INFO};
