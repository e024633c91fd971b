//! The fixed vocabulary of recognised skills, plus spelling variants for
//! high-value skills. Immutable; lookup tables are built once.

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::Serialize;

use crate::parsing::text::title_case;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Language,
    Web,
    Database,
    CloudDevops,
    DataScience,
    Mobile,
    Tools,
    Soft,
}

/// Canonical spellings by category. These are also the display names.
pub const SKILL_CATALOGUE: &[(SkillCategory, &[&str])] = &[
    (
        SkillCategory::Language,
        &[
            "Python", "JavaScript", "Java", "C++", "C#", "PHP", "Ruby", "Go", "Rust", "Swift",
            "Kotlin", "TypeScript", "Scala", "R", "MATLAB", "Perl", "Shell", "Bash",
        ],
    ),
    (
        SkillCategory::Web,
        &[
            "HTML", "CSS", "React", "Angular", "Vue.js", "Node.js", "Express.js", "Django",
            "Flask", "FastAPI", "Spring", "Laravel", "Rails", "ASP.NET", "jQuery", "Bootstrap",
            "Tailwind CSS", "SASS", "LESS", "Webpack", "Vite", "Next.js", "Nuxt.js",
        ],
    ),
    (
        SkillCategory::Database,
        &[
            "MySQL", "PostgreSQL", "MongoDB", "Redis", "SQLite", "Oracle", "SQL Server",
            "Cassandra", "DynamoDB", "Elasticsearch", "Neo4j", "Firebase",
        ],
    ),
    (
        SkillCategory::CloudDevops,
        &[
            "AWS", "Azure", "Google Cloud", "Docker", "Kubernetes", "Jenkins", "GitLab CI",
            "GitHub Actions", "Terraform", "Ansible", "Chef", "Puppet", "Vagrant",
        ],
    ),
    (
        SkillCategory::DataScience,
        &[
            "Machine Learning", "Deep Learning", "TensorFlow", "PyTorch", "Keras",
            "Scikit-learn", "Pandas", "NumPy", "Matplotlib", "Seaborn", "Jupyter",
            "Apache Spark", "Hadoop", "Tableau", "Power BI", "D3.js", "OpenCV", "NLTK", "spaCy",
        ],
    ),
    (
        SkillCategory::Mobile,
        &["iOS", "Android", "React Native", "Flutter", "Xamarin", "Ionic"],
    ),
    (
        SkillCategory::Tools,
        &[
            "Git", "SVN", "Jira", "Confluence", "Slack", "Trello", "Figma",
            "Adobe Creative Suite", "Photoshop", "Illustrator", "InDesign", "Sketch", "InVision",
            "Zeplin",
        ],
    ),
    (
        SkillCategory::Soft,
        &[
            "Leadership", "Communication", "Teamwork", "Problem Solving", "Critical Thinking",
            "Project Management", "Time Management", "Adaptability", "Creativity", "Innovation",
            "Analytical Skills", "Attention to Detail", "Customer Service", "Negotiation",
            "Presentation Skills", "Public Speaking", "Mentoring", "Coaching",
        ],
    ),
];

/// Spelling variants (lower-case) that all record the canonical skill.
pub const SKILL_ALIASES: &[(&str, &[&str])] = &[
    // Languages
    ("Python", &["python", "py"]),
    ("JavaScript", &["javascript", "js", "ecmascript"]),
    ("Java", &["java"]),
    ("C++", &["c++", "cpp", "c plus plus"]),
    ("C#", &["c#", "csharp", "c sharp"]),
    ("PHP", &["php"]),
    ("Ruby", &["ruby"]),
    ("Go", &["golang", "go"]),
    ("Rust", &["rust"]),
    ("Swift", &["swift"]),
    ("Kotlin", &["kotlin"]),
    ("TypeScript", &["typescript", "ts"]),
    ("Scala", &["scala"]),
    ("R", &["r programming", "r language"]),
    // Web
    ("HTML", &["html", "html5"]),
    ("CSS", &["css", "css3"]),
    ("React", &["react", "reactjs", "react.js"]),
    ("Angular", &["angular", "angularjs"]),
    ("Vue.js", &["vue", "vuejs", "vue.js"]),
    ("Node.js", &["nodejs", "node.js", "node js"]),
    ("Express.js", &["express", "expressjs", "express.js"]),
    ("Django", &["django"]),
    ("Flask", &["flask"]),
    ("Spring", &["spring", "spring boot"]),
    ("Laravel", &["laravel"]),
    ("Rails", &["rails", "ruby on rails"]),
    // Databases
    ("MySQL", &["mysql"]),
    ("PostgreSQL", &["postgresql", "postgres"]),
    ("MongoDB", &["mongodb", "mongo"]),
    ("Redis", &["redis"]),
    ("SQLite", &["sqlite"]),
    ("Oracle", &["oracle", "oracle db"]),
    // Cloud & DevOps
    ("AWS", &["aws", "amazon web services"]),
    ("Azure", &["azure", "microsoft azure"]),
    ("Google Cloud", &["gcp", "google cloud", "google cloud platform"]),
    ("Docker", &["docker"]),
    ("Kubernetes", &["kubernetes", "k8s"]),
    ("Jenkins", &["jenkins"]),
    ("Git", &["git"]),
    // Data science
    ("Machine Learning", &["machine learning", "ml"]),
    ("Deep Learning", &["deep learning", "dl"]),
    ("TensorFlow", &["tensorflow"]),
    ("PyTorch", &["pytorch"]),
    ("Pandas", &["pandas"]),
    ("NumPy", &["numpy"]),
    ("Scikit-learn", &["scikit-learn", "sklearn"]),
];

pub fn catalogue_terms() -> impl Iterator<Item = (SkillCategory, &'static str)> {
    SKILL_CATALOGUE
        .iter()
        .flat_map(|(category, terms)| terms.iter().map(move |t| (*category, *t)))
}

/// Lower-cased spelling → canonical name, over catalogue terms and aliases.
static CANONICAL_NAMES: LazyLock<HashMap<String, &'static str>> = LazyLock::new(|| {
    let mut names = HashMap::new();
    for (canonical, variants) in SKILL_ALIASES {
        for variant in *variants {
            names.insert(variant.to_string(), *canonical);
        }
    }
    // Catalogue spellings win over alias variants.
    for (_, term) in catalogue_terms() {
        names.insert(term.to_lowercase(), term);
    }
    names
});

pub fn canonical_name(term: &str) -> Option<&'static str> {
    CANONICAL_NAMES.get(term.trim().to_lowercase().as_str()).copied()
}

/// Display form of a skill: its canonical spelling if known, else title case.
pub fn skill_display_name(raw: &str) -> String {
    let trimmed = raw.trim();
    canonical_name(trimmed)
        .map(str::to_string)
        .unwrap_or_else(|| title_case(trimmed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue_size() {
        let count = catalogue_terms().count();
        assert!(count >= 80, "catalogue has {count} terms");
    }

    #[test]
    fn test_alias_resolves_to_canonical() {
        assert_eq!(canonical_name("k8s"), Some("Kubernetes"));
        assert_eq!(canonical_name("Postgres"), Some("PostgreSQL"));
        assert_eq!(canonical_name(" golang "), Some("Go"));
        assert_eq!(canonical_name("cobol"), None);
    }

    #[test]
    fn test_display_name_prefers_catalogue_spelling() {
        assert_eq!(skill_display_name("aws"), "AWS");
        assert_eq!(skill_display_name("node.js"), "Node.js");
        assert_eq!(skill_display_name("graphql apis"), "Graphql Apis");
    }

    #[test]
    fn test_every_alias_canonical_is_display_stable() {
        for (canonical, _) in SKILL_ALIASES {
            assert_eq!(skill_display_name(canonical), *canonical);
        }
    }
}
