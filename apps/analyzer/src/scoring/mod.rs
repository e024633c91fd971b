// Scoring Engine
// Overall quality, ATS compatibility and skill match, each from weighted sub-factors,
// plus the rule tables that explain a score as strengths and improvements.

pub mod ats;
pub mod feedback;
pub mod missing;
pub mod overall;
pub mod skill_match;
pub mod weights;

pub use ats::calculate_ats_score;
pub use feedback::{identify_improvements, identify_strengths, job_tailoring_improvement, FeedbackContext};
pub use missing::find_missing_keywords;
pub use overall::calculate_overall_score;
pub use skill_match::{
    calculate_skill_match_score, calculate_skill_match_score_with, skill_match_breakdown,
    SkillMatchBreakdown,
};
pub use weights::{ScoringWeights, Tier};
