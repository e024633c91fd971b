//! Course suggestions for a skill the candidate lacks.
//!
//! Known skills come from a fixed course catalogue; anything else gets a
//! generic two-course path at the lowest priority.

use serde::{Deserialize, Serialize};

use crate::parsing::catalogue::skill_display_name;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub title: String,
    pub provider: String,
    pub duration: String,
    pub rating: f32, // 0.0 – 5.0
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningPath {
    pub skill: String,
    pub courses: Vec<Course>,
    pub estimated_duration: String,
    /// 1 = learn first.
    pub priority: u8,
}

struct CourseEntry {
    title: &'static str,
    provider: &'static str,
    duration: &'static str,
    rating: f32,
    url: &'static str,
}

struct PathEntry {
    skill: &'static str,
    courses: &'static [CourseEntry],
    duration: &'static str,
    priority: u8,
}

const fn course(
    title: &'static str,
    provider: &'static str,
    duration: &'static str,
    rating: f32,
    url: &'static str,
) -> CourseEntry {
    CourseEntry {
        title,
        provider,
        duration,
        rating,
        url,
    }
}

const COURSE_CATALOGUE: &[PathEntry] = &[
    PathEntry {
        skill: "python",
        courses: &[
            course("Python for Everybody Specialization", "Coursera", "8 months", 4.8, "https://coursera.org/python"),
            course("Complete Python Developer Bootcamp", "Udemy", "30 hours", 4.6, "https://udemy.com/python"),
            course("Python for Data Science", "edX", "10 weeks", 4.5, "https://edx.org/python-data-science"),
        ],
        duration: "2-3 months",
        priority: 1,
    },
    PathEntry {
        skill: "react",
        courses: &[
            course("React - The Complete Guide 2024", "Udemy", "52 hours", 4.7, "https://udemy.com/react"),
            course("Full-Stack Web Development with React", "Coursera", "6 months", 4.6, "https://coursera.org/react"),
            course("React Hooks and Context", "Pluralsight", "4 hours", 4.4, "https://pluralsight.com/react-hooks"),
        ],
        duration: "1-2 months",
        priority: 1,
    },
    PathEntry {
        skill: "machine learning",
        courses: &[
            course("Machine Learning Specialization", "Coursera", "3 months", 4.9, "https://coursera.org/ml"),
            course("Machine Learning A-Z: Python & R", "Udemy", "50 hours", 4.6, "https://udemy.com/ml"),
            course("Introduction to Machine Learning", "MIT OpenCourseWare", "12 weeks", 4.8, "https://ocw.mit.edu/ml"),
        ],
        duration: "3-4 months",
        priority: 2,
    },
    PathEntry {
        skill: "javascript",
        courses: &[
            course("The Complete JavaScript Course 2024", "Udemy", "69 hours", 4.7, "https://udemy.com/javascript"),
            course("JavaScript Algorithms and Data Structures", "freeCodeCamp", "300 hours", 4.8, "https://freecodecamp.org/javascript"),
        ],
        duration: "2-3 months",
        priority: 1,
    },
    PathEntry {
        skill: "aws",
        courses: &[
            course("AWS Certified Solutions Architect", "A Cloud Guru", "25 hours", 4.6, "https://acloudguru.com/aws-architect"),
            course("AWS Fundamentals Specialization", "Coursera", "4 months", 4.5, "https://coursera.org/aws"),
        ],
        duration: "2-4 months",
        priority: 2,
    },
    PathEntry {
        skill: "docker",
        courses: &[
            course("Docker Mastery: Complete Toolset", "Udemy", "19 hours", 4.6, "https://udemy.com/docker"),
            course("Introduction to Containers and Docker", "edX", "4 weeks", 4.4, "https://edx.org/docker"),
        ],
        duration: "1-2 months",
        priority: 2,
    },
];

const GENERIC_DURATION: &str = "1-3 months";
const GENERIC_PRIORITY: u8 = 3;

impl CourseEntry {
    fn to_course(&self) -> Course {
        Course {
            title: self.title.to_string(),
            provider: self.provider.to_string(),
            duration: self.duration.to_string(),
            rating: self.rating,
            url: self.url.to_string(),
        }
    }
}

pub fn learning_path(skill: &str) -> LearningPath {
    let key = skill.trim().to_lowercase();
    let display = skill_display_name(&key);

    match COURSE_CATALOGUE.iter().find(|entry| entry.skill == key) {
        Some(entry) => LearningPath {
            skill: display,
            courses: entry.courses.iter().map(CourseEntry::to_course).collect(),
            estimated_duration: entry.duration.to_string(),
            priority: entry.priority,
        },
        None => generic_path(&key, display),
    }
}

fn generic_path(key: &str, display: String) -> LearningPath {
    let slug = key.split_whitespace().collect::<Vec<_>>().join("-");
    LearningPath {
        courses: vec![
            Course {
                title: format!("Complete {display} Course"),
                provider: "Online Learning Platform".to_string(),
                duration: "4-8 weeks".to_string(),
                rating: 4.2,
                url: format!("https://search.com/courses/{slug}"),
            },
            Course {
                title: format!("{display} Fundamentals"),
                provider: "Tech Academy".to_string(),
                duration: "2-4 weeks".to_string(),
                rating: 4.0,
                url: format!("https://academy.com/{slug}"),
            },
        ],
        skill: display,
        estimated_duration: GENERIC_DURATION.to_string(),
        priority: GENERIC_PRIORITY,
    }
}
