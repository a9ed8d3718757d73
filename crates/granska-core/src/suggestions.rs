//! Deterministic improvement suggestions derived from the scores.

use crate::matching::outcome::KeywordAnalysis;
use crate::model::FormattingAudit;
use crate::scoring::outcome::{CompositeScore, Criterion};
use serde::{Deserialize, Serialize};

pub const MAX_SUGGESTIONS: usize = 8;
const MAX_KEYWORDS_SUGGESTED: usize = 5;

const ATS_THRESHOLD: f64 = 70.0;
const JOB_FIT_THRESHOLD: f64 = 60.0;
const EXPERIENCE_THRESHOLD: f64 = 70.0;
const SKILLS_THRESHOLD: f64 = 60.0;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub title: String,
    pub detail: String,
}

impl Suggestion {
    fn new(title: &str, detail: impl Into<String>) -> Self {
        Self {
            title: title.to_string(),
            detail: detail.into(),
        }
    }
}

/// Suggestion for one formatting issue, keyed on the issue wording.
fn for_issue(issue: &str) -> Option<Suggestion> {
    let lower = issue.to_lowercase();
    if lower.contains("image") {
        Some(Suggestion::new(
            "Remove Images",
            "ATS systems cannot read images. Replace them with text descriptions.",
        ))
    } else if lower.contains("short") {
        Some(Suggestion::new(
            "Expand Content",
            "Add more detail about your experience and achievements (aim for 500-800 words).",
        ))
    } else if lower.contains("long") {
        Some(Suggestion::new(
            "Reduce Length",
            "Trim the resume to 1-2 pages by focusing on the most relevant experience.",
        ))
    } else if lower.contains("section") {
        Some(Suggestion::new("Add Sections", issue))
    } else {
        None
    }
}

fn breakdown_below(score: &CompositeScore, criterion: Criterion, threshold: f64) -> bool {
    score
        .breakdown
        .get(&criterion)
        .is_some_and(|&value| value < threshold)
}

/// Build the suggestion list, in rule order, capped at [`MAX_SUGGESTIONS`].
pub fn suggest(
    ats: &CompositeScore,
    job_fit: &CompositeScore,
    formatting: &FormattingAudit,
    analysis: &KeywordAnalysis,
) -> Vec<Suggestion> {
    let mut suggestions = Vec::new();

    if ats.total < ATS_THRESHOLD {
        suggestions.push(Suggestion::new(
            "ATS Compatibility",
            "The resume scored below 70% for ATS compatibility. Simplify formatting and use standard section headers.",
        ));
    }

    suggestions.extend(formatting.issues.iter().map(String::as_str).filter_map(for_issue));

    if job_fit.total < JOB_FIT_THRESHOLD {
        suggestions.push(Suggestion::new(
            "Improve Job Match",
            format!(
                "The resume matches only {:.0}% with the target role. Add relevant keywords and experience.",
                job_fit.total
            ),
        ));
    }

    let missing = &analysis.keyword_match.missing_keywords;
    if !missing.is_empty() {
        let top: Vec<&str> = missing
            .iter()
            .take(MAX_KEYWORDS_SUGGESTED)
            .map(String::as_str)
            .collect();
        suggestions.push(Suggestion::new(
            "Add Keywords",
            format!("Include these high-value skills: {}", top.join(", ")),
        ));
    }

    if breakdown_below(job_fit, Criterion::ExperienceRelevance, EXPERIENCE_THRESHOLD) {
        suggestions.push(Suggestion::new(
            "Quantify Achievements",
            "Add numbers and metrics to experience bullets (e.g. 'Increased sales by 30%').",
        ));
    }

    if breakdown_below(job_fit, Criterion::SkillsCoverage, SKILLS_THRESHOLD) {
        suggestions.push(Suggestion::new(
            "Expand Skills Section",
            "Add more technical skills relevant to the target role.",
        ));
    }

    suggestions.truncate(MAX_SUGGESTIONS);
    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::outcome::KeywordMatchResult;
    use crate::scoring::outcome::Grade;
    use pretty_assertions::assert_eq;
    use std::collections::BTreeMap;

    fn composite(total: f64, breakdown: &[(Criterion, f64)]) -> CompositeScore {
        CompositeScore {
            total,
            breakdown: breakdown.iter().copied().collect::<BTreeMap<_, _>>(),
            grade: Grade::C,
        }
    }

    fn audit(issues: &[&str]) -> FormattingAudit {
        FormattingAudit {
            score: 100,
            issues: issues.iter().map(|s| s.to_string()).collect(),
            sections_found: vec![],
            word_count: 500,
        }
    }

    fn titles(suggestions: &[Suggestion]) -> Vec<&str> {
        suggestions.iter().map(|s| s.title.as_str()).collect()
    }

    #[test]
    fn test_strong_resume_gets_no_suggestions() {
        let ats = composite(90.0, &[]);
        let fit = composite(
            80.0,
            &[
                (Criterion::ExperienceRelevance, 100.0),
                (Criterion::SkillsCoverage, 80.0),
            ],
        );
        let result = suggest(&ats, &fit, &audit(&[]), &KeywordAnalysis::default());
        assert!(result.is_empty());
    }

    #[test]
    fn test_rules_fire_in_order() {
        let ats = composite(40.0, &[]);
        let fit = composite(
            33.4,
            &[
                (Criterion::ExperienceRelevance, 60.0),
                (Criterion::SkillsCoverage, 20.0),
            ],
        );
        let analysis = KeywordAnalysis {
            keyword_match: KeywordMatchResult {
                missing_keywords: ["Rust", "Go", "SQL", "AWS", "Docker", "Kafka"]
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
                ..KeywordMatchResult::default()
            },
            ..KeywordAnalysis::default()
        };
        let formatting = audit(&[
            "Contains images - may not be ATS-friendly",
            "No email address found",
        ]);

        let result = suggest(&ats, &fit, &formatting, &analysis);
        assert_eq!(
            titles(&result),
            vec![
                "ATS Compatibility",
                "Remove Images",
                "Improve Job Match",
                "Add Keywords",
                "Quantify Achievements",
                "Expand Skills Section",
            ]
        );
        assert!(result[2].detail.contains("only 33%"));
        assert_eq!(
            result[3].detail,
            "Include these high-value skills: Rust, Go, SQL, AWS, Docker"
        );
    }

    #[test]
    fn test_section_issue_is_quoted() {
        let result = suggest(
            &composite(90.0, &[]),
            &composite(90.0, &[]),
            &audit(&["Missing sections: education, skills"]),
            &KeywordAnalysis::default(),
        );
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "Add Sections");
        assert_eq!(result[0].detail, "Missing sections: education, skills");
    }

    #[test]
    fn test_capped() {
        let issues: Vec<String> = (0..12).map(|i| format!("Resume too short ({i})")).collect();
        let refs: Vec<&str> = issues.iter().map(String::as_str).collect();
        let result = suggest(
            &composite(10.0, &[]),
            &composite(10.0, &[]),
            &audit(&refs),
            &KeywordAnalysis::default(),
        );
        assert_eq!(result.len(), MAX_SUGGESTIONS);
        assert_eq!(result[0].title, "ATS Compatibility");
        assert!(result[1..].iter().all(|s| s.title == "Expand Content"));
    }
}
