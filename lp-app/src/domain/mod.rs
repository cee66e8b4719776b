mod brief;
mod lp_plan;
mod sections;

pub use brief::Brief;
pub use lp_plan::LpPlan;
pub use sections::{DraftSections, RevisedSections};
