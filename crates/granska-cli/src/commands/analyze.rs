use granska_core::config::{load_tables, AnalyzerConfig};
use granska_core::error::GranskaError;
use granska_core::model::{DocumentMetadata, ResumeDocument};
use granska_core::Analyzer;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::output;

pub struct AnalyzeArgs {
    pub input_file: PathBuf,
    pub field: Option<String>,
    pub taxonomy: Option<PathBuf>,
    pub tables: Option<PathBuf>,
    pub has_images: bool,
    pub has_tables: bool,
    pub pages: Option<u32>,
    pub output_format: String,
    pub out: Option<PathBuf>,
    pub verbose: bool,
}

/// Pre-decoded request, as produced by a document decoder.
#[derive(Debug, Deserialize)]
struct AnalyzeRequest {
    text: String,
    #[serde(default)]
    metadata: DocumentMetadata,
    #[serde(default)]
    job_field_id: Option<String>,
}

fn read_request(path: &Path) -> Result<AnalyzeRequest, GranskaError> {
    let is_json = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if is_json {
        let bytes = std::fs::read(path)?;
        Ok(serde_json::from_slice(&bytes)?)
    } else {
        Ok(AnalyzeRequest {
            text: std::fs::read_to_string(path)?,
            metadata: DocumentMetadata::default(),
            job_field_id: None,
        })
    }
}

/// Tables from `--tables` when given, otherwise the built-in set.
fn select_config(custom: Option<&AnalyzerConfig>) -> &AnalyzerConfig {
    match custom {
        Some(config) => config,
        None => AnalyzerConfig::builtin(),
    }
}

pub fn run(args: AnalyzeArgs) -> Result<(), GranskaError> {
    let taxonomy = super::load_taxonomy(args.taxonomy.as_deref())?;
    let custom_config = args.tables.as_deref().map(load_tables).transpose()?;
    let config = select_config(custom_config.as_ref());

    let request = read_request(&args.input_file)?;
    let job_field_id = args.field.or(request.job_field_id).ok_or_else(|| {
        GranskaError::InvalidInput(
            "no job field given; pass --field or set job_field_id in the request".into(),
        )
    })?;
    if taxonomy.get(&job_field_id).is_none() {
        tracing::warn!(
            job_field_id = %job_field_id,
            "job field not in taxonomy; scoring against an empty profile"
        );
    }

    // Flags only ever add to what the request already reports.
    let mut metadata = request.metadata;
    metadata.has_images |= args.has_images;
    metadata.has_tables |= args.has_tables;
    if let Some(pages) = args.pages {
        metadata.page_count = pages;
    }

    let document = ResumeDocument::new(request.text).with_metadata(metadata);
    let record = Analyzer::new(&taxonomy)
        .with_config(config)
        .analyze(&document, &job_field_id)?;

    if let Some(path) = &args.out {
        // Always write JSON when saving to file
        std::fs::write(path, serde_json::to_string_pretty(&record)?)?;
        eprintln!("Analysis written to {}", path.display());
    }

    match args.output_format.as_str() {
        "json" => output::json::print(&record)?,
        _ => output::table::print(&record, args.verbose),
    }

    Ok(())
}
