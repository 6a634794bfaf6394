//! Deduplication and ranking of extracted highlights.

use std::collections::HashSet;

use crate::insights::models::{AchievementHighlight, ProjectHighlight};

/// Each output list keeps at most this many highlights.
pub const MAX_HIGHLIGHTS: usize = 5;

/// Case-insensitive record of titles already emitted during one extraction.
#[derive(Debug, Default)]
pub struct SeenTitles(HashSet<String>);

impl SeenTitles {
    /// Records `title`; returns false if an equal title (ignoring case) was seen before.
    pub fn insert(&mut self, title: &str) -> bool {
        self.0.insert(title.to_lowercase())
    }
}

/// Sorts by confidence descending (ties keep sentence order) and keeps the top `MAX_HIGHLIGHTS`.
pub fn rank_projects(mut projects: Vec<ProjectHighlight>) -> Vec<ProjectHighlight> {
    projects.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
    projects.truncate(MAX_HIGHLIGHTS);
    projects
}

/// Keeps sentence order and the first `MAX_HIGHLIGHTS`.
pub fn rank_achievements(mut achievements: Vec<AchievementHighlight>) -> Vec<AchievementHighlight> {
    achievements.truncate(MAX_HIGHLIGHTS);
    achievements
}
