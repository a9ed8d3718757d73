pub mod contact;
pub mod entries;
pub mod formatting;
pub mod sections;
pub mod skills;

use crate::config::AnalyzerConfig;
use crate::error::GranskaError;
use crate::language::LanguageAnalyzer;
use crate::model::{ResumeDocument, ResumeFacts};

/// Turn a resume document into structured facts.
///
/// Segmentation and every extractor run over the full text independently;
/// the formatting audit reuses the segmenter and contact results.
pub fn parse_resume(
    document: &ResumeDocument,
    language: &dyn LanguageAnalyzer,
    config: &AnalyzerConfig,
) -> Result<ResumeFacts, GranskaError> {
    let text = document.text.as_str();

    let sections = sections::segment(text, config);
    let contact = contact::extract_contact(text, config);
    let skills = skills::extract_skills(text, language, config)?;
    let experience = entries::extract_experience(text, config);
    let education = entries::extract_education(text, config);
    let formatting = formatting::audit(text, &document.metadata, &sections, &contact, config);

    tracing::debug!(
        sections = sections.blocks.len(),
        experience = experience.len(),
        education = education.len(),
        word_count = formatting.word_count,
        formatting_score = formatting.score,
        "parsed resume"
    );

    Ok(ResumeFacts {
        sections,
        contact,
        skills,
        experience,
        education,
        formatting,
    })
}
