use crate::config::AnalyzerConfig;
use crate::error::GranskaError;
use crate::language::LanguageAnalyzer;
use crate::model::SkillSet;

/// Collect skill candidates from the lowercased resume text.
///
/// Keeps every token found in the skill vocabulary, plus every noun phrase
/// of at most `max_skill_phrase_words` words. The phrase rule favours
/// recall; categorization later files most of it under "other".
pub fn extract_skills(
    text: &str,
    language: &dyn LanguageAnalyzer,
    config: &AnalyzerConfig,
) -> Result<SkillSet, GranskaError> {
    let features = language.analyze(&text.to_lowercase())?;
    let mut skills = SkillSet::new();

    for token in &features.tokens {
        let token = token.to_lowercase();
        if config.skill_vocabulary.contains(&token) {
            skills.insert(token);
        }
    }

    for phrase in &features.noun_phrases {
        let phrase = phrase.to_lowercase();
        let words = phrase.split_whitespace().count();
        if words > 0 && words <= config.max_skill_phrase_words {
            skills.insert(phrase);
        }
    }

    tracing::debug!(
        backend = language.backend_name(),
        tokens = features.tokens.len(),
        phrases = features.noun_phrases.len(),
        skills = skills.len(),
        "extracted skill candidates"
    );

    Ok(skills)
}
