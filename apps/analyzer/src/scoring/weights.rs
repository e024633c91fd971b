//! Product-tuned scoring constants, grouped so callers can override them.
//!
//! None of these thresholds has a derivation behind it; they are configuration.

use serde::{Deserialize, Serialize};

use crate::models::SectionName;

/// One step of a threshold ladder: a count of at least `min` earns `points`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tier {
    pub min: usize,
    pub points: u32,
}

const fn tier(min: usize, points: u32) -> Tier {
    Tier { min, points }
}

/// Points for the highest tier whose `min` is met, or 0.
/// Tiers need not be sorted.
pub fn tier_points(tiers: &[Tier], value: usize) -> u32 {
    tiers
        .iter()
        .filter(|t| value >= t.min)
        .max_by_key(|t| t.min)
        .map(|t| t.points)
        .unwrap_or(0)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    // Overall score
    pub section_points: Vec<(SectionName, u32)>,
    pub skill_tiers: Vec<Tier>,
    pub experience_tiers: Vec<Tier>,
    pub text_length_tiers: Vec<Tier>,
    pub keyword_tiers: Vec<Tier>,
    pub email_bonus: u32,
    pub phone_bonus: u32,

    // ATS score
    pub ats_format_bonus: u32,
    pub ats_section_points: Vec<(SectionName, u32)>,
    pub ats_skill_tiers: Vec<Tier>,
    pub ats_line_tiers: Vec<Tier>,

    // Skill match
    pub exact_match_weight: f64,
    pub partial_match_weight: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            section_points: vec![
                (SectionName::Contact, 10),
                (SectionName::Experience, 15),
                (SectionName::Education, 10),
                (SectionName::Skills, 5),
            ],
            skill_tiers: vec![tier(10, 20), tier(5, 15), tier(3, 10), tier(1, 5)],
            experience_tiers: vec![tier(3, 10), tier(1, 5)],
            text_length_tiers: vec![tier(2000, 15), tier(1000, 12), tier(500, 8), tier(200, 5)],
            keyword_tiers: vec![tier(15, 10), tier(10, 7), tier(5, 5)],
            email_bonus: 3,
            phone_bonus: 2,

            ats_format_bonus: 20,
            ats_section_points: vec![
                (SectionName::Contact, 10),
                (SectionName::Experience, 10),
                (SectionName::Skills, 10),
            ],
            ats_skill_tiers: vec![tier(8, 30), tier(5, 20), tier(3, 15), tier(1, 10)],
            ats_line_tiers: vec![tier(20, 20), tier(15, 15), tier(10, 10), tier(5, 5)],

            exact_match_weight: 0.7,
            partial_match_weight: 0.3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_points_picks_highest_met_tier() {
        let tiers = ScoringWeights::default().skill_tiers;
        assert_eq!(tier_points(&tiers, 0), 0);
        assert_eq!(tier_points(&tiers, 1), 5);
        assert_eq!(tier_points(&tiers, 4), 10);
        assert_eq!(tier_points(&tiers, 9), 15);
        assert_eq!(tier_points(&tiers, 40), 20);
    }

    #[test]
    fn test_tier_points_order_independent() {
        let tiers = [tier(1, 5), tier(10, 20), tier(5, 15)];
        assert_eq!(tier_points(&tiers, 7), 15);
    }

    #[test]
    fn test_default_overall_maximum_exceeds_cap() {
        // 40 + 20 + 10 + 15 + 10 + 5 = 100 before clamping
        let w = ScoringWeights::default();
        let sections: u32 = w.section_points.iter().map(|(_, p)| p).sum();
        assert_eq!(sections, 40);
        let max = sections
            + tier_points(&w.skill_tiers, usize::MAX)
            + tier_points(&w.experience_tiers, usize::MAX)
            + tier_points(&w.text_length_tiers, usize::MAX)
            + tier_points(&w.keyword_tiers, usize::MAX)
            + w.email_bonus
            + w.phone_bonus;
        assert_eq!(max, 100);
    }

    #[test]
    fn test_match_weights_sum_to_one() {
        let w = ScoringWeights::default();
        assert!((w.exact_match_weight + w.partial_match_weight - 1.0).abs() < f64::EPSILON);
    }
}
