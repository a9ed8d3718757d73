//! Lookup tables driving the heuristics and the scoring model.
//!
//! [`LookupTables`] is the serializable, editable form. [`AnalyzerConfig`]
//! is the validated form with every pattern compiled, built once and shared
//! read-only across analyses.

use crate::error::GranskaError;
use crate::model::SectionLabel;
use crate::scoring::outcome::{CompositeKind, Criterion, Grade};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::Path;
use std::sync::LazyLock;

const SECTION_PATTERNS: &[(SectionLabel, &str)] = &[
    (
        SectionLabel::Contact,
        r"(email|phone|mobile|address|linkedin|github)",
    ),
    (SectionLabel::Summary, r"(summary|objective|profile|about)"),
    (
        SectionLabel::Experience,
        r"(experience|employment|work history|professional experience)",
    ),
    (
        SectionLabel::Education,
        r"(education|academic|qualifications|degrees)",
    ),
    (
        SectionLabel::Skills,
        r"(skills|technical skills|competencies|expertise)",
    ),
    (SectionLabel::Projects, r"(projects|portfolio)"),
    (
        SectionLabel::Certifications,
        r"(certifications|licenses|credentials)",
    ),
    (
        SectionLabel::Achievements,
        r"(achievements|awards|honors|accomplishments)",
    ),
];

const SKILL_VOCABULARY: &[&str] = &[
    "python",
    "java",
    "javascript",
    "c++",
    "sql",
    "html",
    "css",
    "react",
    "angular",
    "vue",
    "node",
    "django",
    "flask",
    "spring",
    "aws",
    "azure",
    "gcp",
    "docker",
    "kubernetes",
    "terraform",
    "machine learning",
    "deep learning",
    "nlp",
    "computer vision",
    "git",
    "jira",
    "agile",
    "scrum",
    "ci/cd",
    "devops",
];

const DEGREE_PATTERNS: &[&str] = &[
    r"(bachelor|master|phd|doctorate|associate|b\.?s\.?|m\.?s\.?|b\.?a\.?|m\.?a\.?)",
    r"(undergraduate|graduate|postgraduate)",
];

const DATE_RANGE_PATTERN: &str = r"(\d{4})\s*[-–]\s*(\d{4}|present|current)";

const EMAIL_PATTERN: &str = r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}\b";
const PHONE_PATTERN: &str = r"(\+?\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}";
const LINKEDIN_PATTERN: &str = r"linkedin\.com/in/[\w-]+";
const GITHUB_PATTERN: &str = r"github\.com/[\w-]+";

const WEIGHT_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionPatternDef {
    pub label: SectionLabel,
    pub pattern: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactPatternDefs {
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub github: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionWeight {
    pub criterion: Criterion,
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeThreshold {
    pub min_score: f64,
    pub grade: Grade,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortlistBucket {
    pub min_score: f64,
    pub label: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortlistTables {
    pub ats_weight: f64,
    pub job_fit_weight: f64,
    /// Highest threshold first. Scores below every threshold land in the
    /// last bucket.
    pub buckets: Vec<ShortlistBucket>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringTables {
    pub ats_weights: Vec<CriterionWeight>,
    pub job_fit_weights: Vec<CriterionWeight>,
    /// Sections counted by the ATS `sections` criterion.
    pub ats_required_sections: Vec<SectionLabel>,
    /// Highest threshold first.
    pub grade_thresholds: Vec<GradeThreshold>,
    /// Grade for totals below every threshold.
    pub fallback_grade: Grade,
    pub shortlist: ShortlistTables,
}

impl ScoringTables {
    pub fn ats_weight_map(&self) -> BTreeMap<Criterion, f64> {
        weight_map(&self.ats_weights)
    }

    pub fn job_fit_weight_map(&self) -> BTreeMap<Criterion, f64> {
        weight_map(&self.job_fit_weights)
    }

    /// Letter grade for a composite total.
    pub fn grade_for(&self, total: f64) -> Grade {
        self.grade_thresholds
            .iter()
            .find(|t| total >= t.min_score)
            .map(|t| t.grade)
            .unwrap_or(self.fallback_grade)
    }
}

fn weight_map(weights: &[CriterionWeight]) -> BTreeMap<Criterion, f64> {
    weights.iter().map(|w| (w.criterion, w.weight)).collect()
}

impl Default for ScoringTables {
    fn default() -> Self {
        let weights = |pairs: &[(Criterion, f64)]| {
            pairs
                .iter()
                .map(|&(criterion, weight)| CriterionWeight { criterion, weight })
                .collect()
        };
        let bucket = |min_score: f64, label: &str, color: &str| ShortlistBucket {
            min_score,
            label: label.to_string(),
            color: color.to_string(),
        };

        Self {
            ats_weights: weights(&[
                (Criterion::Formatting, 0.20),
                (Criterion::Sections, 0.20),
                (Criterion::Readability, 0.20),
                (Criterion::ContactInfo, 0.15),
                (Criterion::Length, 0.15),
                (Criterion::Keywords, 0.10),
            ]),
            job_fit_weights: weights(&[
                (Criterion::KeywordMatch, 0.40),
                (Criterion::SemanticSimilarity, 0.20),
                (Criterion::ExperienceRelevance, 0.20),
                (Criterion::EducationFit, 0.10),
                (Criterion::SkillsCoverage, 0.10),
            ]),
            ats_required_sections: vec![
                SectionLabel::Experience,
                SectionLabel::Education,
                SectionLabel::Skills,
                SectionLabel::Contact,
            ],
            grade_thresholds: vec![
                GradeThreshold {
                    min_score: 85.0,
                    grade: Grade::A,
                },
                GradeThreshold {
                    min_score: 70.0,
                    grade: Grade::B,
                },
                GradeThreshold {
                    min_score: 50.0,
                    grade: Grade::C,
                },
                GradeThreshold {
                    min_score: 30.0,
                    grade: Grade::D,
                },
            ],
            fallback_grade: Grade::F,
            shortlist: ShortlistTables {
                ats_weight: 0.45,
                job_fit_weight: 0.55,
                buckets: vec![
                    bucket(80.0, "Very High (85-95%)", "#10b981"),
                    bucket(65.0, "High (70-85%)", "#3b82f6"),
                    bucket(50.0, "Moderate (50-70%)", "#f59e0b"),
                    bucket(35.0, "Low (30-50%)", "#ef4444"),
                    bucket(0.0, "Very Low (< 30%)", "#991b1b"),
                ],
            },
        }
    }
}

/// Every fixed table the analyzer consults, in editable form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LookupTables {
    /// Checked in order; the first matching pattern labels the header.
    pub section_patterns: Vec<SectionPatternDef>,
    pub max_header_tokens: usize,
    pub skill_vocabulary: Vec<String>,
    pub max_skill_phrase_words: usize,
    pub degree_patterns: Vec<String>,
    pub date_range_pattern: String,
    pub contact_patterns: ContactPatternDefs,
    /// Sections whose absence the formatting audit penalises.
    pub audit_required_sections: Vec<SectionLabel>,
    pub scoring: ScoringTables,
}

impl Default for LookupTables {
    fn default() -> Self {
        Self {
            section_patterns: SECTION_PATTERNS
                .iter()
                .map(|&(label, pattern)| SectionPatternDef {
                    label,
                    pattern: pattern.to_string(),
                })
                .collect(),
            max_header_tokens: 5,
            skill_vocabulary: SKILL_VOCABULARY.iter().map(|s| s.to_string()).collect(),
            max_skill_phrase_words: 3,
            degree_patterns: DEGREE_PATTERNS.iter().map(|s| s.to_string()).collect(),
            date_range_pattern: DATE_RANGE_PATTERN.to_string(),
            contact_patterns: ContactPatternDefs {
                email: EMAIL_PATTERN.to_string(),
                phone: PHONE_PATTERN.to_string(),
                linkedin: LINKEDIN_PATTERN.to_string(),
                github: GITHUB_PATTERN.to_string(),
            },
            audit_required_sections: vec![
                SectionLabel::Experience,
                SectionLabel::Education,
                SectionLabel::Skills,
            ],
            scoring: ScoringTables::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SectionRule {
    pub label: SectionLabel,
    pub pattern: Regex,
}

#[derive(Debug, Clone)]
pub struct ContactPatterns {
    pub email: Regex,
    pub phone: Regex,
    pub linkedin: Regex,
    pub github: Regex,
}

/// Validated lookup tables with compiled patterns.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    pub section_rules: Vec<SectionRule>,
    pub max_header_tokens: usize,
    pub skill_vocabulary: HashSet<String>,
    pub max_skill_phrase_words: usize,
    pub degree_patterns: Vec<Regex>,
    pub date_range: Regex,
    pub contact: ContactPatterns,
    pub audit_required_sections: Vec<SectionLabel>,
    pub scoring: ScoringTables,
}

static BUILTIN: LazyLock<AnalyzerConfig> = LazyLock::new(|| {
    AnalyzerConfig::from_tables(&LookupTables::default())
        .expect("built-in lookup tables must compile")
});

impl AnalyzerConfig {
    /// The built-in tables, compiled once per process.
    pub fn builtin() -> &'static AnalyzerConfig {
        &BUILTIN
    }

    pub fn from_tables(tables: &LookupTables) -> Result<Self, GranskaError> {
        validate_tables(tables)?;

        let section_rules = tables
            .section_patterns
            .iter()
            .map(|def| {
                Ok(SectionRule {
                    label: def.label,
                    pattern: Regex::new(&def.pattern)?,
                })
            })
            .collect::<Result<Vec<_>, GranskaError>>()?;

        let degree_patterns = tables
            .degree_patterns
            .iter()
            .map(|p| Regex::new(p))
            .collect::<Result<Vec<_>, _>>()?;

        let contact = &tables.contact_patterns;

        Ok(Self {
            section_rules,
            max_header_tokens: tables.max_header_tokens,
            skill_vocabulary: tables
                .skill_vocabulary
                .iter()
                .map(|s| s.to_lowercase())
                .collect(),
            max_skill_phrase_words: tables.max_skill_phrase_words,
            degree_patterns,
            date_range: Regex::new(&tables.date_range_pattern)?,
            contact: ContactPatterns {
                email: Regex::new(&contact.email)?,
                phone: Regex::new(&contact.phone)?,
                linkedin: Regex::new(&contact.linkedin)?,
                github: Regex::new(&contact.github)?,
            },
            audit_required_sections: tables.audit_required_sections.clone(),
            scoring: tables.scoring.clone(),
        })
    }
}

/// Load lookup tables from a JSON file and compile them.
pub fn load_tables(path: &Path) -> Result<AnalyzerConfig, GranskaError> {
    let content = std::fs::read_to_string(path).map_err(|e| GranskaError::TablesLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let tables: LookupTables =
        serde_json::from_str(&content).map_err(|e| GranskaError::TablesLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    AnalyzerConfig::from_tables(&tables)
}

/// Check table shape before compiling anything.
pub fn validate_tables(tables: &LookupTables) -> Result<(), GranskaError> {
    if tables.section_patterns.is_empty() {
        return Err(GranskaError::TablesInvalid(
            "section_patterns must not be empty".into(),
        ));
    }
    if tables
        .section_patterns
        .iter()
        .any(|p| p.label == SectionLabel::Header)
    {
        return Err(GranskaError::TablesInvalid(
            "'header' is the implicit leading section and cannot have a pattern".into(),
        ));
    }
    if tables.max_header_tokens == 0 {
        return Err(GranskaError::TablesInvalid(
            "max_header_tokens must be at least 1".into(),
        ));
    }
    if tables.max_skill_phrase_words == 0 {
        return Err(GranskaError::TablesInvalid(
            "max_skill_phrase_words must be at least 1".into(),
        ));
    }

    let scoring = &tables.scoring;
    check_weights("ats_weights", CompositeKind::Ats, &scoring.ats_weights)?;
    check_weights("job_fit_weights", CompositeKind::JobFit, &scoring.job_fit_weights)?;

    if scoring.ats_required_sections.is_empty() {
        return Err(GranskaError::TablesInvalid(
            "ats_required_sections must not be empty".into(),
        ));
    }

    if !is_descending(scoring.grade_thresholds.iter().map(|t| t.min_score)) {
        return Err(GranskaError::TablesInvalid(
            "grade_thresholds must be ordered from highest to lowest".into(),
        ));
    }

    let shortlist = &scoring.shortlist;
    if (shortlist.ats_weight + shortlist.job_fit_weight - 1.0).abs() > WEIGHT_TOLERANCE {
        return Err(GranskaError::TablesInvalid(
            "shortlist ats_weight and job_fit_weight must sum to 1".into(),
        ));
    }
    if shortlist.buckets.is_empty() {
        return Err(GranskaError::TablesInvalid(
            "shortlist buckets must not be empty".into(),
        ));
    }
    if !is_descending(shortlist.buckets.iter().map(|b| b.min_score)) {
        return Err(GranskaError::TablesInvalid(
            "shortlist buckets must be ordered from highest to lowest".into(),
        ));
    }

    Ok(())
}

fn check_weights(
    name: &str,
    kind: CompositeKind,
    weights: &[CriterionWeight],
) -> Result<(), GranskaError> {
    if weights.is_empty() {
        return Err(GranskaError::TablesInvalid(format!(
            "{name} must not be empty"
        )));
    }
    let mut seen = HashSet::new();
    for w in weights {
        if !kind.criteria().contains(&w.criterion) {
            return Err(GranskaError::TablesInvalid(format!(
                "{name}: '{}' is not part of the {kind} score",
                w.criterion
            )));
        }
        if !(0.0..=1.0).contains(&w.weight) {
            return Err(GranskaError::TablesInvalid(format!(
                "{name}: weight for '{}' must be within 0..=1",
                w.criterion
            )));
        }
        if !seen.insert(w.criterion) {
            return Err(GranskaError::TablesInvalid(format!(
                "{name}: criterion '{}' listed twice",
                w.criterion
            )));
        }
    }
    let sum: f64 = weights.iter().map(|w| w.weight).sum();
    if (sum - 1.0).abs() > WEIGHT_TOLERANCE {
        return Err(GranskaError::TablesInvalid(format!(
            "{name} must sum to 1 (got {sum})"
        )));
    }
    Ok(())
}

fn is_descending(values: impl Iterator<Item = f64>) -> bool {
    let values: Vec<f64> = values.collect();
    values.windows(2).all(|w| w[0] > w[1])
}
