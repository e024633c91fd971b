use crate::models::ParsedResume;
use crate::scoring::weights::{tier_points, ScoringWeights};

/// Overall résumé quality, 0 – 100.
///
/// Additive: section completeness, skill count, experience entries, text
/// length (in characters), keyword count, then small bonuses for an email
/// and a phone number. The sum is capped at 100.
pub fn calculate_overall_score(
    parsed: &ParsedResume,
    text_chars: usize,
    weights: &ScoringWeights,
) -> u32 {
    let sections: u32 = weights
        .section_points
        .iter()
        .filter(|(section, _)| parsed.sections.is_present(*section))
        .map(|(_, points)| points)
        .sum();

    let mut score = sections
        + tier_points(&weights.skill_tiers, parsed.skills.len())
        + tier_points(&weights.experience_tiers, parsed.experience.len())
        + tier_points(&weights.text_length_tiers, text_chars)
        + tier_points(&weights.keyword_tiers, parsed.keywords.len());

    if parsed.contact_info.email.is_some() {
        score += weights.email_bonus;
    }
    if parsed.contact_info.phone.is_some() {
        score += weights.phone_bonus;
    }

    score.min(100)
}
