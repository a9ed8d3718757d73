use serde::{Deserialize, Serialize};

/// Exact keyword coverage of a resume against a job profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeywordMatchResult {
    /// matched / required × 100, two decimals; 0 when nothing is required.
    pub match_percentage: f64,
    /// Keywords found in the resume, taxonomy casing and order.
    pub matched_keywords: Vec<String>,
    /// First keywords not found, in taxonomy order (at most ten).
    pub missing_keywords: Vec<String>,
    pub total_required: usize,
    pub total_matched: usize,
}

/// Extracted skills partitioned by taxonomy membership.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorizedSkills {
    pub core_skills: Vec<String>,
    pub tools: Vec<String>,
    pub frameworks: Vec<String>,
    pub other: Vec<String>,
}

impl CategorizedSkills {
    pub fn total(&self) -> usize {
        self.core_skills.len() + self.tools.len() + self.frameworks.len() + self.other.len()
    }
}

/// Everything the matcher reports for one resume / job-field pair.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeywordAnalysis {
    pub keyword_match: KeywordMatchResult,
    /// TF-IDF cosine similarity, 0–100, two decimals.
    pub semantic_similarity: f64,
    pub categorized_skills: CategorizedSkills,
    pub job_display_name: String,
}
