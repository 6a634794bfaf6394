//! Resume insights service: keyword-heuristic extraction of project and achievement
//! highlights from resume text, exposed as a library and over HTTP.

pub mod config;
pub mod errors;
pub mod insights;
pub mod routes;
pub mod state;

pub use insights::{
    extract_insights, AchievementHighlight, HighlightCategory, ProjectHighlight, ResumeInsights,
};
