pub mod categorize;
pub mod keywords;
pub mod outcome;
pub mod semantic;

pub use categorize::categorize_skills;
pub use keywords::match_keywords;
pub use outcome::{CategorizedSkills, KeywordAnalysis, KeywordMatchResult};
pub use semantic::semantic_similarity;

use crate::model::SkillSet;
use crate::taxonomy::schema::JobTaxonomy;

/// Match a resume against one job field of the taxonomy.
///
/// Unknown job fields behave as a profile with no keywords: zero required,
/// zero similarity, every skill in "other".
pub fn analyze_keywords(
    resume_text: &str,
    skills: &SkillSet,
    job_field_id: &str,
    taxonomy: &JobTaxonomy,
) -> KeywordAnalysis {
    if taxonomy.get(job_field_id).is_none() {
        tracing::debug!(job_field_id, "unknown job field, using empty profile");
    }
    let profile = taxonomy.profile_or_empty(job_field_id);

    let keyword_match = match_keywords(resume_text, profile);
    let semantic_similarity = semantic_similarity(resume_text, &profile.required_keywords());
    let categorized_skills = categorize_skills(skills, profile);

    tracing::debug!(
        job_field_id,
        matched = keyword_match.total_matched,
        required = keyword_match.total_required,
        semantic_similarity,
        "keyword analysis complete"
    );

    KeywordAnalysis {
        keyword_match,
        semantic_similarity,
        categorized_skills,
        job_display_name: taxonomy.display_name(job_field_id),
    }
}
