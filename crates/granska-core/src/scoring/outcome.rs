use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Named sub-score of a composite. Declaration order is breakdown order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    // ATS composite
    Formatting,
    Sections,
    Readability,
    ContactInfo,
    Length,
    Keywords,
    // Job-fit composite
    KeywordMatch,
    SemanticSimilarity,
    ExperienceRelevance,
    EducationFit,
    SkillsCoverage,
}

impl Criterion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Criterion::Formatting => "formatting",
            Criterion::Sections => "sections",
            Criterion::Readability => "readability",
            Criterion::ContactInfo => "contact_info",
            Criterion::Length => "length",
            Criterion::Keywords => "keywords",
            Criterion::KeywordMatch => "keyword_match",
            Criterion::SemanticSimilarity => "semantic_similarity",
            Criterion::ExperienceRelevance => "experience_relevance",
            Criterion::EducationFit => "education_fit",
            Criterion::SkillsCoverage => "skills_coverage",
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompositeKind {
    Ats,
    JobFit,
}

impl CompositeKind {
    /// Criteria this composite is built from, in breakdown order.
    pub fn criteria(&self) -> &'static [Criterion] {
        match self {
            CompositeKind::Ats => &[
                Criterion::Formatting,
                Criterion::Sections,
                Criterion::Readability,
                Criterion::ContactInfo,
                Criterion::Length,
                Criterion::Keywords,
            ],
            CompositeKind::JobFit => &[
                Criterion::KeywordMatch,
                Criterion::SemanticSimilarity,
                Criterion::ExperienceRelevance,
                Criterion::EducationFit,
                Criterion::SkillsCoverage,
            ],
        }
    }
}

impl fmt::Display for CompositeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompositeKind::Ats => write!(f, "ATS compatibility"),
            CompositeKind::JobFit => write!(f, "Job fit"),
        }
    }
}

/// Weighted composite of 0–100 sub-scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositeScore {
    /// Weighted total, 0–100, two decimals.
    pub total: f64,
    /// Raw (pre-weighting) sub-score per criterion.
    pub breakdown: BTreeMap<Criterion, f64>,
    pub grade: Grade,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortlistEstimate {
    pub probability: String,
    pub combined_score: f64,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarCategory {
    pub category: String,
    pub score: f64,
}
