use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Keyword profile of one target role.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobProfile {
    pub name: String,
    #[serde(default)]
    pub core_skills: Vec<String>,
    #[serde(default)]
    pub tools: Vec<String>,
    #[serde(default)]
    pub frameworks: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl JobProfile {
    /// All keywords as stored, in category order: core skills, tools,
    /// frameworks, free keywords. Duplicates are kept.
    pub fn all_keywords(&self) -> impl Iterator<Item = &String> {
        self.core_skills
            .iter()
            .chain(&self.tools)
            .chain(&self.frameworks)
            .chain(&self.keywords)
    }

    /// [`Self::all_keywords`], lowercased.
    pub fn required_keywords(&self) -> Vec<String> {
        self.all_keywords().map(|k| k.to_lowercase()).collect()
    }

    pub fn keyword_count(&self) -> usize {
        self.core_skills.len() + self.tools.len() + self.frameworks.len() + self.keywords.len()
    }
}

/// Summary row for listing available job fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobFieldSummary {
    pub id: String,
    pub name: String,
    pub skills_count: usize,
}

/// Read-only mapping from job-field id to profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobTaxonomy {
    pub profiles: BTreeMap<String, JobProfile>,
}

static EMPTY_PROFILE: JobProfile = JobProfile {
    name: String::new(),
    core_skills: Vec::new(),
    tools: Vec::new(),
    frameworks: Vec::new(),
    keywords: Vec::new(),
};

impl JobTaxonomy {
    pub fn get(&self, job_field_id: &str) -> Option<&JobProfile> {
        self.profiles.get(job_field_id)
    }

    /// Profile for `job_field_id`, or an empty profile for unknown ids.
    pub fn profile_or_empty(&self, job_field_id: &str) -> &JobProfile {
        self.get(job_field_id).unwrap_or(&EMPTY_PROFILE)
    }

    /// Display name for a job field; unknown ids display as themselves.
    pub fn display_name(&self, job_field_id: &str) -> String {
        self.get(job_field_id)
            .map(|p| p.name.clone())
            .unwrap_or_else(|| job_field_id.to_string())
    }

    /// Available job fields, sorted by id.
    pub fn fields(&self) -> Vec<JobFieldSummary> {
        self.profiles
            .iter()
            .map(|(id, profile)| JobFieldSummary {
                id: id.clone(),
                name: profile.name.clone(),
                skills_count: profile.core_skills.len(),
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}
