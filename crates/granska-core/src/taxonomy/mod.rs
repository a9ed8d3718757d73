pub mod builtin;
pub mod schema;

use crate::error::GranskaError;
use schema::JobTaxonomy;
use std::path::Path;

/// Load a job taxonomy from a JSON file.
pub fn load_taxonomy(path: &Path) -> Result<JobTaxonomy, GranskaError> {
    let content = std::fs::read_to_string(path).map_err(|e| GranskaError::TaxonomyLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_taxonomy(&content, path)
}

/// Parse a job taxonomy from a JSON string, reporting errors against `source`.
pub fn parse_taxonomy(json: &str, source: &Path) -> Result<JobTaxonomy, GranskaError> {
    let taxonomy: JobTaxonomy =
        serde_json::from_str(json).map_err(|e| GranskaError::TaxonomyLoad {
            path: source.to_path_buf(),
            reason: e.to_string(),
        })?;
    validate_taxonomy(&taxonomy)?;
    tracing::debug!(path = %source.display(), fields = taxonomy.len(), "loaded taxonomy");
    Ok(taxonomy)
}

/// Parse a job taxonomy from a JSON string (no file path context).
pub fn parse_taxonomy_str(json: &str) -> Result<JobTaxonomy, GranskaError> {
    let taxonomy: JobTaxonomy = serde_json::from_str(json).map_err(GranskaError::Json)?;
    validate_taxonomy(&taxonomy)?;
    Ok(taxonomy)
}

/// Validate that a taxonomy is well-formed.
pub fn validate_taxonomy(taxonomy: &JobTaxonomy) -> Result<(), GranskaError> {
    if taxonomy.is_empty() {
        return Err(GranskaError::TaxonomyInvalid(
            "taxonomy must define at least one job field".into(),
        ));
    }

    for (id, profile) in &taxonomy.profiles {
        if id.trim().is_empty() {
            return Err(GranskaError::TaxonomyInvalid(
                "job field id must not be empty".into(),
            ));
        }

        if profile.name.trim().is_empty() {
            return Err(GranskaError::TaxonomyInvalid(format!(
                "job field '{}' has no name",
                id
            )));
        }

        let lists = [
            ("core_skills", &profile.core_skills),
            ("tools", &profile.tools),
            ("frameworks", &profile.frameworks),
            ("keywords", &profile.keywords),
        ];
        for (list_name, entries) in lists {
            if entries.iter().any(|k| k.trim().is_empty()) {
                return Err(GranskaError::TaxonomyInvalid(format!(
                    "job field '{}' has a blank entry in {}",
                    id, list_name
                )));
            }
        }
    }

    Ok(())
}
