use crate::models::{FileKind, ParsedResume};
use crate::scoring::weights::{tier_points, ScoringWeights};

/// Lines with any non-whitespace content.
pub fn non_empty_line_count(text: &str) -> usize {
    text.split('\n').filter(|line| !line.trim().is_empty()).count()
}

/// ATS compatibility, 0 – 100: how well an automated keyword scanner can
/// read the document.
///
/// `file_kind` is the declared upload type; `None` means the caller only has
/// text and no format bonus applies.
pub fn calculate_ats_score(
    parsed: &ParsedResume,
    text: &str,
    file_kind: Option<FileKind>,
    weights: &ScoringWeights,
) -> u32 {
    let format = if file_kind.is_some() {
        weights.ats_format_bonus
    } else {
        0
    };

    let sections: u32 = weights
        .ats_section_points
        .iter()
        .filter(|(section, _)| parsed.sections.is_present(*section))
        .map(|(_, points)| points)
        .sum();

    let score = format
        + sections
        + tier_points(&weights.ats_skill_tiers, parsed.skills.len())
        + tier_points(&weights.ats_line_tiers, non_empty_line_count(text));

    score.min(100)
}
