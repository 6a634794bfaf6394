//! Per-record enrichment: tech stack, impact keywords, confidence.

use crate::insights::vocabulary::{IMPACT_TERMS, TECH_TERMS};

pub const MAX_TECH_STACK: usize = 8;
pub const MAX_IMPACT_KEYWORDS: usize = 5;

/// Weight of each project-keyword hit.
const INDICATOR_WEIGHT: f64 = 0.3;
/// Bonus when at least one technology is recognised.
const TECH_BONUS: f64 = 0.2;
/// Length credit is `chars / LENGTH_SCALE`, capped at `LENGTH_CAP`.
const LENGTH_SCALE: f64 = 250.0;
const LENGTH_CAP: f64 = 0.5;

/// Technologies mentioned in `text_lower`, in vocabulary order, display-formatted.
pub fn extract_tech_stack(text_lower: &str) -> Vec<String> {
    TECH_TERMS
        .iter()
        .filter(|term| text_lower.contains(*term))
        .take(MAX_TECH_STACK)
        .map(|term| format_tech_term(term))
        .collect()
}

/// Short alphabetic terms are acronyms (`aws` → `AWS`); everything else is title-cased
/// (`scikit-learn` → `Scikit-Learn`).
pub fn format_tech_term(term: &str) -> String {
    let is_acronym = term.chars().count() <= 4 && term.chars().all(char::is_alphabetic);
    if is_acronym {
        term.to_uppercase()
    } else {
        title_case(term)
    }
}

/// Uppercases the first letter of each alphabetic run and lowercases the rest.
fn title_case(term: &str) -> String {
    let mut out = String::with_capacity(term.len());
    let mut prev_alpha = false;
    for c in term.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}

/// Impact verbs found in `text_lower`, in `IMPACT_TERMS` order.
pub fn extract_impact_keywords(text_lower: &str) -> Vec<String> {
    IMPACT_TERMS
        .iter()
        .filter(|term| text_lower.contains(*term))
        .take(MAX_IMPACT_KEYWORDS)
        .map(|term| term.to_string())
        .collect()
}

/// Heuristic project confidence in [0, 1], rounded to two decimals:
/// 0.3 per keyword hit + 0.2 with a known tech stack + up to 0.5 for sentence length.
pub fn compute_confidence(indicator_hits: usize, has_tech_stack: bool, sentence_chars: usize) -> f64 {
    let tech = if has_tech_stack { TECH_BONUS } else { 0.0 };
    let length = (sentence_chars as f64 / LENGTH_SCALE).min(LENGTH_CAP);
    let raw = (INDICATOR_WEIGHT * indicator_hits as f64 + tech + length).min(1.0);
    round_to_cents(raw)
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_short_alpha_is_upper() {
        assert_eq!(format_tech_term("aws"), "AWS");
        assert_eq!(format_tech_term("sql"), "SQL");
        assert_eq!(format_tech_term("node"), "NODE");
        assert_eq!(format_tech_term("r"), "R");
    }

    #[test]
    fn test_format_long_or_symbolic_is_title_case() {
        assert_eq!(format_tech_term("python"), "Python");
        assert_eq!(format_tech_term("scikit-learn"), "Scikit-Learn");
        assert_eq!(format_tech_term("c++"), "C++");
        assert_eq!(format_tech_term("c#"), "C#");
        assert_eq!(format_tech_term("ci/cd"), "Ci/Cd");
        assert_eq!(format_tech_term("nodejs"), "Nodejs");
    }

    #[test]
    fn test_tech_stack_in_vocabulary_order() {
        let stack = extract_tech_stack("deployed with docker on aws using python and django");
        // "go" hides inside "django" and "r" inside "docker".
        assert_eq!(stack, vec!["AWS", "Django", "Docker", "GO", "Python", "R"]);
    }

    #[test]
    fn test_tech_stack_is_substring_based() {
        // "r" matches any sentence containing the letter.
        let stack = extract_tech_stack("stored events in mongodb");
        assert_eq!(stack, vec!["GO", "Mongodb", "R"]);
    }

    #[test]
    fn test_tech_stack_capped() {
        let text = "airflow angular ansible aws azure bigquery bitbucket docker kubernetes";
        let stack = extract_tech_stack(text);
        assert_eq!(stack.len(), MAX_TECH_STACK);
        assert_eq!(
            stack,
            vec!["Airflow", "Angular", "Ansible", "AWS", "Azure", "Bigquery", "Bitbucket", "Docker"]
        );
    }

    #[test]
    fn test_tech_stack_empty() {
        assert!(extract_tech_stack("baked a cake").is_empty());
    }

    #[test]
    fn test_impact_keywords_fixed_order() {
        let kws = extract_impact_keywords("mentored juniors and led the team, organized meetups");
        assert_eq!(kws, vec!["led", "organized", "mentored"]);
    }

    #[test]
    fn test_impact_keywords_capped() {
        let kws = extract_impact_keywords(
            "led organized increased reduced boosted improved mentored trained",
        );
        assert_eq!(kws, vec!["led", "organized", "increased", "reduced", "boosted"]);
    }

    #[test]
    fn test_confidence_formula() {
        // 0.3 + 0.0 + 100/250 = 0.7
        assert!((compute_confidence(1, false, 100) - 0.7).abs() < 1e-9);
        // 0.3 + 0.2 + 67/250 = 0.768 -> 0.77
        assert!((compute_confidence(1, true, 67) - 0.77).abs() < 1e-9);
    }

    #[test]
    fn test_confidence_length_credit_capped() {
        // 0.3 + 0.5 (cap) = 0.8
        assert!((compute_confidence(1, false, 1_000) - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_confidence_capped_at_one() {
        assert_eq!(compute_confidence(5, true, 400), 1.0);
    }

    #[test]
    fn test_confidence_bounds() {
        for hits in 0..6 {
            for chars in [0, 26, 80, 125, 250, 900] {
                for tech in [false, true] {
                    let c = compute_confidence(hits, tech, chars);
                    assert!((0.0..=1.0).contains(&c), "confidence {c} out of range");
                }
            }
        }
    }
}
