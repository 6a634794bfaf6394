//! Keyword vocabularies for highlight classification.
//!
//! Every list is stored in lexicographic order. Tech-stack truncation depends on
//! iteration order, so keep new entries sorted.

/// Substrings that mark a sentence as describing a project.
pub const PROJECT_KEYWORDS: &[&str] = &[
    "app",
    "application",
    "capstone",
    "case study",
    "feature",
    "hackathon",
    "module",
    "platform",
    "portfolio",
    "product",
    "project",
    "projects",
    "prototype",
    "research project",
    "solution",
    "system",
    "tool",
];

/// Substrings that mark awards, honours, certifications and publications.
pub const ACHIEVEMENT_KEYWORDS: &[&str] = &[
    "achievement",
    "achievements",
    "award",
    "awarded",
    "certification",
    "certified",
    "finalist",
    "honor",
    "honours",
    "placed",
    "presented",
    "publication",
    "published",
    "recognition",
    "recognized",
    "runner-up",
    "scholarship",
    "selected",
    "speaker",
    "winner",
    "won",
];

/// Substrings that mark clubs, sports, volunteering and other activities outside coursework.
pub const CO_CURRICULAR_KEYWORDS: &[&str] = &[
    "association",
    "athletics",
    "campus",
    "captain",
    "club",
    "co-curricular",
    "coach",
    "community",
    "competition",
    "contest",
    "cultural",
    "dance",
    "drama",
    "event",
    "extracurricular",
    "festival",
    "leadership",
    "mentor",
    "music",
    "organised",
    "organization",
    "organized",
    "society",
    "sports",
    "volunteer",
    "volunteered",
];

/// Languages, frameworks, data tooling, cloud/devops and databases.
pub const TECH_TERMS: &[&str] = &[
    "airflow",
    "angular",
    "ansible",
    "aws",
    "azure",
    "bigquery",
    "bitbucket",
    "c#",
    "c++",
    "ci/cd",
    "cpp",
    "csharp",
    "css",
    "dbt",
    "django",
    "docker",
    "dynamodb",
    "elastic",
    "elasticsearch",
    "express",
    "fastapi",
    "flask",
    "gcp",
    "github",
    "gitlab",
    "go",
    "golang",
    "hadoop",
    "helm",
    "html",
    "java",
    "javascript",
    "jenkins",
    "keras",
    "kotlin",
    "kubernetes",
    "laravel",
    "matlab",
    "matplotlib",
    "mongodb",
    "mysql",
    "nextjs",
    "node",
    "nodejs",
    "nosql",
    "numpy",
    "nuxt",
    "pandas",
    "php",
    "postgres",
    "postgresql",
    "python",
    "pytorch",
    "r",
    "rails",
    "react",
    "redis",
    "redshift",
    "ruby",
    "rust",
    "scala",
    "scikit-learn",
    "seaborn",
    "sklearn",
    "snowflake",
    "spark",
    "spring",
    "sql",
    "swift",
    "tensorflow",
    "terraform",
    "typescript",
    "vue",
];

/// Outcome verbs surfaced on achievements, in display order.
pub const IMPACT_TERMS: &[&str] = &[
    "led",
    "organized",
    "increased",
    "reduced",
    "boosted",
    "improved",
    "mentored",
    "trained",
    "volunteered",
    "collaborated",
    "presented",
    "coordinated",
    "hosted",
];

/// Counts vocabulary entries contained in `text_lower`.
pub fn count_hits(vocabulary: &[&str], text_lower: &str) -> usize {
    vocabulary.iter().filter(|kw| text_lower.contains(*kw)).count()
}

/// True when any vocabulary entry is contained in `text_lower`.
pub fn any_hit(vocabulary: &[&str], text_lower: &str) -> bool {
    vocabulary.iter().any(|kw| text_lower.contains(kw))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_sorted_unique(name: &str, list: &[&str]) {
        for pair in list.windows(2) {
            assert!(
                pair[0] < pair[1],
                "{name} out of order or duplicated: {:?} before {:?}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_vocabularies_are_sorted_and_unique() {
        assert_sorted_unique("PROJECT_KEYWORDS", PROJECT_KEYWORDS);
        assert_sorted_unique("ACHIEVEMENT_KEYWORDS", ACHIEVEMENT_KEYWORDS);
        assert_sorted_unique("CO_CURRICULAR_KEYWORDS", CO_CURRICULAR_KEYWORDS);
        assert_sorted_unique("TECH_TERMS", TECH_TERMS);
    }

    #[test]
    fn test_vocabularies_are_lowercase() {
        for list in [
            PROJECT_KEYWORDS,
            ACHIEVEMENT_KEYWORDS,
            CO_CURRICULAR_KEYWORDS,
            TECH_TERMS,
            IMPACT_TERMS,
        ] {
            for kw in list {
                assert_eq!(*kw, kw.to_lowercase(), "keyword {kw:?} is not lowercase");
            }
        }
    }

    #[test]
    fn test_vocabulary_sizes() {
        assert_eq!(PROJECT_KEYWORDS.len(), 17);
        assert_eq!(ACHIEVEMENT_KEYWORDS.len(), 21);
        assert_eq!(CO_CURRICULAR_KEYWORDS.len(), 26);
        assert_eq!(TECH_TERMS.len(), 73);
        assert_eq!(IMPACT_TERMS.len(), 13);
    }

    #[test]
    fn test_count_hits_is_substring_based() {
        // "app" and "application" both match; "happy" also contains "app".
        assert_eq!(count_hits(PROJECT_KEYWORDS, "a happy application"), 2);
    }

    #[test]
    fn test_count_hits_none() {
        assert_eq!(count_hits(PROJECT_KEYWORDS, "studied linear algebra"), 0);
    }

    #[test]
    fn test_any_hit() {
        assert!(any_hit(CO_CURRICULAR_KEYWORDS, "captain of the chess club"));
        assert!(!any_hit(CO_CURRICULAR_KEYWORDS, "wrote unit tests"));
    }
}
