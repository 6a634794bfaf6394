use serde::{Deserialize, Serialize};

/// A sentence judged to describe a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectHighlight {
    pub title: String,
    pub summary: String,
    /// At most 8 display-formatted technology names.
    pub tech_stack: Vec<String>,
    /// 0.0 – 1.0, two decimals.
    pub confidence: f64,
}

/// Whether an achievement-like sentence is an award or an activity outside coursework.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HighlightCategory {
    Achievement,
    #[serde(rename = "Co-curricular")]
    CoCurricular,
}

/// A sentence judged to describe an award, honour or co-curricular activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AchievementHighlight {
    pub title: String,
    pub details: String,
    pub category: HighlightCategory,
    /// At most 5 impact verbs.
    pub impact_keywords: Vec<String>,
}

/// Extraction output: top projects by confidence and top achievements in text order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeInsights {
    pub projects: Vec<ProjectHighlight>,
    pub achievements: Vec<AchievementHighlight>,
}

impl ResumeInsights {
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty() && self.achievements.is_empty()
    }
}
