pub mod analyze;
pub mod fields;
pub mod taxonomy;

use granska_core::error::GranskaError;
use granska_core::taxonomy::schema::JobTaxonomy;
use std::path::Path;

/// Custom taxonomy when a path is given, otherwise the built-in one.
pub fn load_taxonomy(path: Option<&Path>) -> Result<JobTaxonomy, GranskaError> {
    match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading custom taxonomy");
            granska_core::taxonomy::load_taxonomy(path)
        }
        None => granska_core::taxonomy::builtin::load_builtin(),
    }
}
