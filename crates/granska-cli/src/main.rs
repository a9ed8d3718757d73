mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(
    name = "granska",
    version,
    about = "ATS compatibility and job-fit scoring for resumes"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a resume (plain text, or a JSON request) against a job field
    Analyze {
        /// Path to a .txt resume or a .json request {text, metadata, job_field_id}
        input_file: PathBuf,

        /// Target job field id (see `granska fields`); overrides the request's job_field_id
        #[arg(short, long, value_name = "ID")]
        field: Option<String>,

        /// Custom job taxonomy JSON file
        #[arg(short, long, value_name = "FILE", env = "GRANSKA_TAXONOMY")]
        taxonomy: Option<PathBuf>,

        /// Custom lookup tables JSON file (patterns, weights, grades)
        #[arg(long, value_name = "FILE")]
        tables: Option<PathBuf>,

        /// The source document contains images
        #[arg(long)]
        has_images: bool,

        /// The source document contains tables
        #[arg(long)]
        has_tables: bool,

        /// Page count of the source document
        #[arg(long, value_name = "N")]
        pages: Option<u32>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write the full analysis record to a JSON file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,

        /// Show the per-criterion score trace
        #[arg(long)]
        verbose: bool,
    },
    /// List available job fields
    Fields {
        /// Custom job taxonomy JSON file
        #[arg(short, long, value_name = "FILE", env = "GRANSKA_TAXONOMY")]
        taxonomy: Option<PathBuf>,
    },
    /// Inspect and validate job taxonomies
    Taxonomy {
        #[command(subcommand)]
        action: TaxonomyAction,
    },
}

#[derive(Subcommand)]
enum TaxonomyAction {
    /// Print the taxonomy JSON schema with an example
    Schema,
    /// Validate a custom taxonomy file
    Validate {
        /// Path to taxonomy JSON file
        file: PathBuf,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Analyze {
            input_file,
            field,
            taxonomy,
            tables,
            has_images,
            has_tables,
            pages,
            output,
            out,
            verbose,
        } => commands::analyze::run(commands::analyze::AnalyzeArgs {
            input_file,
            field,
            taxonomy,
            tables,
            has_images,
            has_tables,
            pages,
            output_format: output,
            out,
            verbose,
        }),
        Commands::Fields { taxonomy } => commands::fields::run(taxonomy.as_deref()),
        Commands::Taxonomy { action } => match action {
            TaxonomyAction::Schema => commands::taxonomy::schema(),
            TaxonomyAction::Validate { file } => commands::taxonomy::validate(&file),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
