//! Resume insights — keyword heuristics that pull project and achievement highlights
//! out of free-form resume text.
//!
//! Pipeline: segment → classify → enrich → dedup/rank. Everything here is synchronous
//! and pure; the HTTP layer lives in `handlers`.

pub mod classifier;
pub mod enrichment;
pub mod handlers;
pub mod models;
pub mod ranking;
pub mod segmenter;
pub mod titles;
pub mod upload;
pub mod vocabulary;

use tracing::debug;

use crate::insights::classifier::{classify_achievement, classify_project};
use crate::insights::enrichment::{compute_confidence, extract_impact_keywords, extract_tech_stack};
use crate::insights::ranking::{rank_achievements, rank_projects, SeenTitles};
use crate::insights::segmenter::segment;
use crate::insights::titles::{infer_achievement_title, infer_project_title};

pub use models::{AchievementHighlight, HighlightCategory, ProjectHighlight, ResumeInsights};

/// Extracts up to five projects (highest confidence first) and up to five
/// achievements (in text order) from resume text. Never fails; text without
/// recognisable highlights yields empty lists.
pub fn extract_insights(resume_text: &str) -> ResumeInsights {
    let sentences = segment(resume_text);
    let projects = rank_projects(collect_projects(&sentences));
    let achievements = rank_achievements(collect_achievements(&sentences));

    debug!(
        sentences = sentences.len(),
        projects = projects.len(),
        achievements = achievements.len(),
        "Extracted resume insights"
    );

    ResumeInsights {
        projects,
        achievements,
    }
}

fn collect_projects(sentences: &[String]) -> Vec<ProjectHighlight> {
    let mut projects = Vec::new();
    let mut seen = SeenTitles::default();

    for sentence in sentences {
        let lower = sentence.to_lowercase();
        let Some(indicator_hits) = classify_project(&lower) else {
            continue;
        };

        let title = infer_project_title(sentence);
        if !seen.insert(&title) {
            continue;
        }

        let tech_stack = extract_tech_stack(&lower);
        let confidence =
            compute_confidence(indicator_hits, !tech_stack.is_empty(), sentence.chars().count());
        projects.push(ProjectHighlight {
            title,
            summary: sentence.clone(),
            tech_stack,
            confidence,
        });
    }

    projects
}

fn collect_achievements(sentences: &[String]) -> Vec<AchievementHighlight> {
    let mut achievements = Vec::new();
    let mut seen = SeenTitles::default();

    for sentence in sentences {
        let lower = sentence.to_lowercase();
        let Some(category) = classify_achievement(&lower) else {
            continue;
        };

        let title = infer_achievement_title(sentence);
        if !seen.insert(&title) {
            continue;
        }

        achievements.push(AchievementHighlight {
            title,
            details: sentence.clone(),
            category,
            impact_keywords: extract_impact_keywords(&lower),
        });
    }

    achievements
}
