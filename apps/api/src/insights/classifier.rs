//! Keyword classification of sentences into project and achievement candidates.

use crate::insights::models::HighlightCategory;
use crate::insights::vocabulary::{
    any_hit, count_hits, ACHIEVEMENT_KEYWORDS, CO_CURRICULAR_KEYWORDS, PROJECT_KEYWORDS,
};

/// Number of project keywords in `text_lower`, or `None` when there are none.
pub fn classify_project(text_lower: &str) -> Option<usize> {
    let indicator_hits = count_hits(PROJECT_KEYWORDS, text_lower);
    (indicator_hits > 0).then_some(indicator_hits)
}

/// Category of an achievement-like sentence, or `None` when no achievement or
/// co-curricular keyword appears. Co-curricular wins over achievement hits.
pub fn classify_achievement(text_lower: &str) -> Option<HighlightCategory> {
    if any_hit(CO_CURRICULAR_KEYWORDS, text_lower) {
        return Some(HighlightCategory::CoCurricular);
    }
    if count_hits(ACHIEVEMENT_KEYWORDS, text_lower) > 0 {
        return Some(HighlightCategory::Achievement);
    }
    None
}
