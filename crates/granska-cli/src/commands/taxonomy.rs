use granska_core::error::GranskaError;
use std::path::Path;

pub fn schema() -> Result<(), GranskaError> {
    print!(
        r#"Job Taxonomy Schema
===================

A taxonomy file maps job-field ids to the keywords a resume for that
role is expected to mention. `granska analyze --field <ID>` matches the
resume against every keyword of the chosen field.

Top-level: an object keyed by job-field id (e.g. "data_scientist").

Each job field:
  name          (string, required)  Display name shown in reports
  core_skills   (array, optional)   Must-have skills. Drives the
                                    skills_coverage score and the
                                    "Core Skills" radar axis.
  tools         (array, optional)   Tools and platforms
  frameworks    (array, optional)   Libraries and frameworks
  keywords      (array, optional)   Other domain terms

All four lists together form the required keywords. Matching is a
case-insensitive substring search of the resume text; a keyword listed
in two lists counts twice. Skills extracted from the resume are filed
under the first list (core_skills, tools, frameworks) that contains
them, or "other".

Example:
{{
  "data_scientist": {{
    "name": "Data Scientist",
    "core_skills": ["Python", "SQL", "Statistics"],
    "tools": ["Jupyter", "Tableau"],
    "frameworks": ["Pandas", "scikit-learn"],
    "keywords": ["regression", "A/B testing"]
  }}
}}

Use a custom file with `--taxonomy FILE` or the GRANSKA_TAXONOMY
environment variable.
"#
    );
    Ok(())
}

pub fn validate(file: &Path) -> Result<(), GranskaError> {
    let taxonomy = granska_core::taxonomy::load_taxonomy(file)?;

    println!("Taxonomy is valid: {} job field(s).", taxonomy.len());

    // Potential issues (warnings, not errors)
    let mut warnings = Vec::new();
    for (id, profile) in &taxonomy.profiles {
        if profile.keyword_count() == 0 {
            warnings.push(format!("job field '{id}' has no keywords"));
        } else if profile.core_skills.is_empty() {
            warnings.push(format!(
                "job field '{id}' has no core_skills; skills_coverage will always be 0"
            ));
        }
    }

    if !warnings.is_empty() {
        println!("\nWarnings:");
        for w in &warnings {
            println!("  - {w}");
        }
    }

    Ok(())
}
