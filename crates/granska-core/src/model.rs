use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Metadata reported by the (external) document decoder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    #[serde(default, alias = "pages")]
    pub page_count: u32,
    #[serde(default, alias = "paragraphs")]
    pub paragraph_count: u32,
    #[serde(default)]
    pub has_images: bool,
    #[serde(default)]
    pub has_tables: bool,
}

/// Plain resume text plus decoder metadata. Input to the pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeDocument {
    pub text: String,
    #[serde(default)]
    pub metadata: DocumentMetadata,
}

impl ResumeDocument {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            metadata: DocumentMetadata::default(),
        }
    }

    pub fn with_metadata(mut self, metadata: DocumentMetadata) -> Self {
        self.metadata = metadata;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionLabel {
    Header,
    Contact,
    Summary,
    Experience,
    Education,
    Skills,
    Projects,
    Certifications,
    Achievements,
}

impl SectionLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionLabel::Header => "header",
            SectionLabel::Contact => "contact",
            SectionLabel::Summary => "summary",
            SectionLabel::Experience => "experience",
            SectionLabel::Education => "education",
            SectionLabel::Skills => "skills",
            SectionLabel::Projects => "projects",
            SectionLabel::Certifications => "certifications",
            SectionLabel::Achievements => "achievements",
        }
    }
}

impl fmt::Display for SectionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A run of consecutive non-header lines assigned to one section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionBlock {
    pub label: SectionLabel,
    pub lines: Vec<String>,
}

impl SectionBlock {
    /// Block text joined with newlines, surrounding whitespace trimmed.
    pub fn text(&self) -> String {
        self.lines.join("\n").trim().to_string()
    }
}

/// Resume sections in input order.
///
/// Every non-header line lives in exactly one block. When a label recurs,
/// lookups resolve to the last block under it; earlier blocks stay in
/// `blocks` but are shadowed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionMap {
    pub blocks: Vec<SectionBlock>,
}

impl SectionMap {
    pub fn get(&self, label: SectionLabel) -> Option<&SectionBlock> {
        self.blocks.iter().rev().find(|b| b.label == label)
    }

    pub fn text(&self, label: SectionLabel) -> Option<String> {
        self.get(label).map(SectionBlock::text)
    }

    pub fn contains(&self, label: SectionLabel) -> bool {
        self.get(label).is_some()
    }

    /// Distinct labels in order of first appearance.
    pub fn labels(&self) -> Vec<SectionLabel> {
        let mut labels = Vec::new();
        for block in &self.blocks {
            if !labels.contains(&block.label) {
                labels.push(block.label);
            }
        }
        labels
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
}

/// Lowercase skill candidates. Sorted so serialized output is stable.
pub type SkillSet = BTreeSet<String>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub duration: Option<String>,
    pub description: String,
}

pub const EDUCATION_LEVEL_DETECTED: &str = "detected";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub level: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattingAudit {
    pub score: u32,
    pub issues: Vec<String>,
    pub sections_found: Vec<SectionLabel>,
    pub word_count: usize,
}

/// Everything the parsing stage learns about a resume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeFacts {
    pub sections: SectionMap,
    pub contact: ContactInfo,
    pub skills: SkillSet,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub formatting: FormattingAudit,
}

/// Round a score to two decimals, ties to even, on the exact binary value
/// of `value`. Non-finite input maps to 0.
pub fn round_score(value: f64) -> f64 {
    Decimal::from_f64_retain(value)
        .map(|d| d.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven))
        .and_then(|d| d.to_f64())
        .unwrap_or(0.0)
}
