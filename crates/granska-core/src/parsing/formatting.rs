use crate::config::AnalyzerConfig;
use crate::model::{ContactInfo, DocumentMetadata, FormattingAudit, SectionLabel, SectionMap};

pub const MIN_WORDS: usize = 300;
pub const MAX_WORDS: usize = 1200;

const IMAGE_PENALTY: u32 = 10;
const SHORT_PENALTY: u32 = 15;
const LONG_PENALTY: u32 = 5;
const MISSING_SECTION_PENALTY: u32 = 10;
const MISSING_EMAIL_PENALTY: u32 = 10;
const MISSING_PHONE_PENALTY: u32 = 5;

/// Whitespace-delimited word count.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Audit a resume for ATS-unfriendly structure.
///
/// Starts at 100 and subtracts a fixed penalty per finding. Issues are
/// listed in evaluation order; downstream suggestion rules key on their
/// wording ("images", "short", "long", "Missing sections", "email",
/// "phone number").
pub fn audit(
    text: &str,
    metadata: &DocumentMetadata,
    sections: &SectionMap,
    contact: &ContactInfo,
    config: &AnalyzerConfig,
) -> FormattingAudit {
    let mut issues = Vec::new();
    let mut penalty: u32 = 0;

    if metadata.has_images {
        issues.push("Contains images - may not be ATS-friendly".to_string());
        penalty += IMAGE_PENALTY;
    }

    let words = word_count(text);
    if words < MIN_WORDS {
        issues.push(format!("Resume too short (< {MIN_WORDS} words)"));
        penalty += SHORT_PENALTY;
    } else if words > MAX_WORDS {
        issues.push(format!("Resume too long (> {MAX_WORDS} words, ~2 pages)"));
        penalty += LONG_PENALTY;
    }

    let missing: Vec<SectionLabel> = config
        .audit_required_sections
        .iter()
        .copied()
        .filter(|label| !sections.contains(*label))
        .collect();
    if !missing.is_empty() {
        let names: Vec<&str> = missing.iter().map(SectionLabel::as_str).collect();
        issues.push(format!("Missing sections: {}", names.join(", ")));
        penalty += MISSING_SECTION_PENALTY * missing.len() as u32;
    }

    if contact.email.is_none() {
        issues.push("No email address found".to_string());
        penalty += MISSING_EMAIL_PENALTY;
    }
    if contact.phone.is_none() {
        issues.push("No phone number found".to_string());
        penalty += MISSING_PHONE_PENALTY;
    }

    FormattingAudit {
        score: 100u32.saturating_sub(penalty),
        issues,
        sections_found: sections.labels(),
        word_count: words,
    }
}
