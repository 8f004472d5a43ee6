use clap::{ArgGroup, Parser, ValueEnum};
use json_adapter::{JsonReportWriter, JsonUserSource};
use markdown_adapter::MarkdownReportWriter;
use sqlite_adapter::{SqliteUserSource, DEFAULT_TABLE};
use stats_core::application::StatisticsService;
use stats_core::ports::{ReportWriter, Result, UserSource};
use tracing_subscriber::EnvFilter;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Markdown,
    Json,
}

/// CLI tool to compute dashboard user statistics (role summary and growth series)
#[derive(Parser, Debug)]
#[command(name = "stats-cli")]
#[command(about = "Summarizes users by role and computes the cumulative growth series")]
#[command(group(ArgGroup::new("input").required(true).args(["input_db", "input_json"])))]
struct Cli {
    /// Path to a SQLite database containing the users table
    #[arg(long = "input-db", env = "STATS_INPUT_DB")]
    input_db: Option<String>,

    /// Path to a JSON array of user rows
    #[arg(long = "input-json", env = "STATS_INPUT_JSON")]
    input_json: Option<String>,

    /// Users table name (SQLite input only)
    #[arg(long = "table", default_value = DEFAULT_TABLE)]
    table: String,

    /// Path where the report will be written
    #[arg(short = 'o', long = "output-file", env = "STATS_OUTPUT_FILE", required = true)]
    output_file: String,

    /// Report format
    #[arg(long = "format", env = "STATS_FORMAT", value_enum, default_value_t = OutputFormat::Markdown)]
    format: OutputFormat,
}

fn build_source(cli: &Cli) -> Result<Box<dyn UserSource>> {
    if let Some(db) = &cli.input_db {
        let source = SqliteUserSource::new(db.clone()).with_table(&cli.table)?;
        return Ok(Box::new(source));
    }
    match &cli.input_json {
        Some(path) => Ok(Box::new(JsonUserSource::new(path.clone()))),
        None => Err(stats_core::StatsError::Config(
            "one of --input-db or --input-json is required".to_string(),
        )),
    }
}

fn build_writer(cli: &Cli) -> Box<dyn ReportWriter> {
    match cli.format {
        OutputFormat::Markdown => Box::new(MarkdownReportWriter::new(cli.output_file.clone())),
        OutputFormat::Json => Box::new(JsonReportWriter::new(cli.output_file.clone())),
    }
}

fn run(cli: &Cli) -> Result<()> {
    // Instantiate the core business service with dependency injection
    let service = StatisticsService::new(build_source(cli)?, build_writer(cli));
    service.execute()?;
    Ok(())
}

fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => {
            println!("Wrote user statistics to {}", cli.output_file);
        }
        Err(e) => {
            tracing::error!(error = %e, "Statistics run failed");
            eprintln!("Error computing statistics: {}", e);
            std::process::exit(1);
        }
    }
}
