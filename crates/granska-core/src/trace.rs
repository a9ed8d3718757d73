use crate::config::ScoringTables;
use crate::matching::outcome::KeywordAnalysis;
use crate::model::{round_score, ResumeFacts};
use crate::scoring::outcome::{CompositeKind, CompositeScore, Criterion};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const TRACE_SCHEMA_VERSION: &str = "1.0";

/// How one sub-score fed into a composite total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceEntry {
    pub composite: CompositeKind,
    pub criterion: Criterion,
    pub raw_score: f64,
    pub weight: f64,
    /// raw_score × weight, two decimals.
    pub contribution: f64,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreTrace {
    pub trace_schema_version: String,
    pub entries: Vec<TraceEntry>,
}

impl Default for ScoreTrace {
    fn default() -> Self {
        Self {
            trace_schema_version: TRACE_SCHEMA_VERSION.to_string(),
            entries: Vec::new(),
        }
    }
}

impl ScoreTrace {
    pub fn for_composite(&self, kind: CompositeKind) -> impl Iterator<Item = &TraceEntry> {
        self.entries.iter().filter(move |e| e.composite == kind)
    }
}

fn yes_no(present: bool) -> &'static str {
    if present {
        "yes"
    } else {
        "no"
    }
}

fn reason_for(
    criterion: Criterion,
    facts: &ResumeFacts,
    analysis: &KeywordAnalysis,
    tables: &ScoringTables,
) -> String {
    let formatting = &facts.formatting;
    let keyword_match = &analysis.keyword_match;

    match criterion {
        Criterion::Formatting => format!(
            "Formatting audit scored {} with {} issue(s)",
            formatting.score,
            formatting.issues.len()
        ),
        Criterion::Sections => {
            let found = tables
                .ats_required_sections
                .iter()
                .filter(|label| formatting.sections_found.contains(label))
                .count();
            format!(
                "{found} of {} required sections present",
                tables.ats_required_sections.len()
            )
        }
        Criterion::Readability | Criterion::Length => {
            format!("{} words", formatting.word_count)
        }
        Criterion::ContactInfo => {
            let contact = &facts.contact;
            format!(
                "email: {}, phone: {}, linkedin: {}, github: {}",
                yes_no(contact.email.is_some()),
                yes_no(contact.phone.is_some()),
                yes_no(contact.linkedin.is_some()),
                yes_no(contact.github.is_some())
            )
        }
        Criterion::Keywords => format!(
            "{}% keyword match scaled by 1.5",
            keyword_match.match_percentage
        ),
        Criterion::KeywordMatch => format!(
            "{} of {} required keywords matched",
            keyword_match.total_matched, keyword_match.total_required
        ),
        Criterion::SemanticSimilarity => format!(
            "TF-IDF cosine similarity {}% against '{}'",
            analysis.semantic_similarity, analysis.job_display_name
        ),
        Criterion::ExperienceRelevance => {
            format!("{} experience entries", facts.experience.len())
        }
        Criterion::EducationFit => {
            format!("{} education entries", facts.education.len())
        }
        Criterion::SkillsCoverage => format!(
            "{} core skills for the role",
            analysis.categorized_skills.core_skills.len()
        ),
    }
}

fn composite_entries(
    kind: CompositeKind,
    score: &CompositeScore,
    weights: &BTreeMap<Criterion, f64>,
    facts: &ResumeFacts,
    analysis: &KeywordAnalysis,
    tables: &ScoringTables,
) -> Vec<TraceEntry> {
    score
        .breakdown
        .iter()
        .map(|(&criterion, &raw_score)| {
            let weight = weights.get(&criterion).copied().unwrap_or(0.0);
            TraceEntry {
                composite: kind,
                criterion,
                raw_score,
                weight,
                contribution: round_score(raw_score * weight),
                reason: reason_for(criterion, facts, analysis, tables),
            }
        })
        .collect()
}

/// Explain both composites, ATS first, each in breakdown order.
pub fn build_score_trace(
    ats: &CompositeScore,
    job_fit: &CompositeScore,
    facts: &ResumeFacts,
    analysis: &KeywordAnalysis,
    tables: &ScoringTables,
) -> ScoreTrace {
    let mut entries = composite_entries(
        CompositeKind::Ats,
        ats,
        &tables.ats_weight_map(),
        facts,
        analysis,
        tables,
    );
    entries.extend(composite_entries(
        CompositeKind::JobFit,
        job_fit,
        &tables.job_fit_weight_map(),
        facts,
        analysis,
        tables,
    ));

    ScoreTrace {
        entries,
        ..ScoreTrace::default()
    }
}
