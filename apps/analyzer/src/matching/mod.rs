// Candidate-to-Job Matching
// Skill-gap reports with learning paths, job ranking and plain text similarity.
// Built on the same skill-match formula as résumé scoring.

pub mod learning_paths;
pub mod recommendations;
pub mod similarity;
pub mod skill_gap;

pub use learning_paths::{learning_path, Course, LearningPath};
pub use recommendations::{recommend_jobs, JobPosting, JobRecommendation};
pub use similarity::text_similarity;
pub use skill_gap::{analyze_skill_gap, SkillGapReport};
