pub mod analysis;
pub mod document;
pub mod resume;

pub use analysis::{AnalysisResult, JobSkillProfile};
pub use document::{FileKind, RawDocument};
pub use resume::{ContactInfo, ParsedResume, SectionMap, SectionName};
