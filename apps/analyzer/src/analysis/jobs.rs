use std::collections::HashMap;

use crate::models::JobSkillProfile;

/// Caller-owned job storage. The analyzer never fetches jobs itself; it only
/// asks this seam for the skill view of one job id.
pub trait JobSource {
    fn job_skill_profile(&self, job_id: &str) -> Option<JobSkillProfile>;
}

impl JobSource for HashMap<String, JobSkillProfile> {
    fn job_skill_profile(&self, job_id: &str) -> Option<JobSkillProfile> {
        self.get(job_id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_lookup() {
        let mut jobs = HashMap::new();
        jobs.insert(
            "42".to_string(),
            JobSkillProfile {
                skills: vec!["Go".into()],
                description: "Services in Go".into(),
            },
        );
        assert_eq!(jobs.job_skill_profile("42").map(|j| j.skills), Some(vec!["Go".to_string()]));
        assert!(jobs.job_skill_profile("7").is_none());
    }
}
