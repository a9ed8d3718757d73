pub mod config;
pub mod error;
pub mod language;
pub mod matching;
pub mod model;
pub mod parsing;
pub mod scoring;
pub mod suggestions;
pub mod taxonomy;
pub mod trace;

use config::AnalyzerConfig;
use error::GranskaError;
use language::{HeuristicAnalyzer, LanguageAnalyzer};
use matching::outcome::KeywordAnalysis;
use model::{ResumeDocument, ResumeFacts};
use scoring::outcome::{CompositeScore, RadarCategory, ShortlistEstimate};
use serde::{Deserialize, Serialize};
use suggestions::Suggestion;
use taxonomy::schema::JobTaxonomy;
use trace::ScoreTrace;

static HEURISTIC: HeuristicAnalyzer = HeuristicAnalyzer;

/// Full result of analysing one resume against one job field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub job_field_id: String,
    pub job_display_name: String,
    pub facts: ResumeFacts,
    pub keyword_analysis: KeywordAnalysis,
    pub ats_score: CompositeScore,
    pub job_fit_score: CompositeScore,
    pub shortlist: ShortlistEstimate,
    pub radar: Vec<RadarCategory>,
    pub suggestions: Vec<Suggestion>,
    pub trace: ScoreTrace,
}

/// Main API entry point.
///
/// Borrows the taxonomy, language backend and lookup tables; all three are
/// read-only, so one analyzer can serve many threads.
#[derive(Clone, Copy)]
pub struct Analyzer<'a> {
    taxonomy: &'a JobTaxonomy,
    language: &'a dyn LanguageAnalyzer,
    config: &'a AnalyzerConfig,
}

impl<'a> Analyzer<'a> {
    /// Analyzer with the heuristic language backend and built-in tables.
    pub fn new(taxonomy: &'a JobTaxonomy) -> Self {
        Self {
            taxonomy,
            language: &HEURISTIC,
            config: AnalyzerConfig::builtin(),
        }
    }

    pub fn with_language(mut self, language: &'a dyn LanguageAnalyzer) -> Self {
        self.language = language;
        self
    }

    pub fn with_config(mut self, config: &'a AnalyzerConfig) -> Self {
        self.config = config;
        self
    }

    /// Run the whole pipeline for one resume.
    ///
    /// Empty text and unknown job fields produce a low-scoring record rather
    /// than an error; only language backend failures are surfaced.
    pub fn analyze(
        &self,
        document: &ResumeDocument,
        job_field_id: &str,
    ) -> Result<AnalysisRecord, GranskaError> {
        let facts = parsing::parse_resume(document, self.language, self.config)?;

        let keyword_analysis =
            matching::analyze_keywords(&document.text, &facts.skills, job_field_id, self.taxonomy);

        let tables = &self.config.scoring;
        let ats_score = scoring::score_ats(&facts, &keyword_analysis, tables);
        let job_fit_score = scoring::score_job_fit(&facts, &keyword_analysis, tables);
        let radar = scoring::radar_data(&keyword_analysis);
        let shortlist = scoring::estimate_shortlist(ats_score.total, job_fit_score.total, tables);

        let suggestions = suggestions::suggest(
            &ats_score,
            &job_fit_score,
            &facts.formatting,
            &keyword_analysis,
        );
        let trace = trace::build_score_trace(
            &ats_score,
            &job_fit_score,
            &facts,
            &keyword_analysis,
            tables,
        );

        tracing::debug!(
            job_field_id,
            backend = self.language.backend_name(),
            ats = ats_score.total,
            job_fit = job_fit_score.total,
            combined = shortlist.combined_score,
            "analysis complete"
        );

        Ok(AnalysisRecord {
            job_field_id: job_field_id.to_string(),
            job_display_name: keyword_analysis.job_display_name.clone(),
            facts,
            keyword_analysis,
            ats_score,
            job_fit_score,
            shortlist,
            radar,
            suggestions,
            trace,
        })
    }
}

/// Analyze with the default backend and built-in tables.
pub fn analyze_resume(
    document: &ResumeDocument,
    job_field_id: &str,
    taxonomy: &JobTaxonomy,
) -> Result<AnalysisRecord, GranskaError> {
    Analyzer::new(taxonomy).analyze(document, job_field_id)
}
