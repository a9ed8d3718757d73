use crate::error::GranskaError;
use crate::taxonomy::schema::JobTaxonomy;
use std::path::Path;

const JOB_ROLES_JSON: &str = include_str!("../../../../taxonomy/job_roles.json");

/// Load the job taxonomy bundled with the crate.
pub fn load_builtin() -> Result<JobTaxonomy, GranskaError> {
    super::parse_taxonomy(JOB_ROLES_JSON, Path::new("<builtin>/job_roles.json"))
}
