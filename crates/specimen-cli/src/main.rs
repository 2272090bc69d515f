use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use specimen_core::{Error as CoreError, SwaggerSpec};
use specimen_gen::{
    ExampleMap, GenerateOptions, definition_examples, request_examples, response_examples,
};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
enum CliError {
    #[error("core error: {0}")]
    Core(#[from] CoreError),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Target {
    /// Request-body examples, one per reference.
    Requests,
    /// Response-body examples, one per reference.
    Responses,
    /// One example per named definition.
    Definitions,
}

#[derive(Parser, Debug)]
#[command(
    name = "specimen",
    version,
    about = "Generate example payloads from a Swagger document"
)]
struct Cli {
    /// Path to the Swagger JSON document.
    file: PathBuf,
    /// Which examples to harvest.
    #[arg(long, value_enum, default_value = "responses")]
    target: Target,
    /// Include object properties marked readOnly.
    #[arg(long, default_value_t = false)]
    include_read_only: bool,
    /// Include object properties marked writeOnly.
    #[arg(long, default_value_t = false)]
    include_write_only: bool,
    /// Keep entries whose body schema carries no reference.
    #[arg(long, default_value_t = false)]
    include_unknown_types: bool,
    /// Emit indexing and harvesting diagnostics to stderr.
    #[arg(long, default_value_t = false)]
    debug: bool,
    /// Print compact JSON instead of pretty-printed.
    #[arg(long, default_value_t = false)]
    compact: bool,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let spec = SwaggerSpec::from_json_file(&cli.file)?;
    let options = GenerateOptions {
        include_read_only: cli.include_read_only,
        include_write_only: cli.include_write_only,
        include_unknown_types: cli.include_unknown_types,
        debug: cli.debug,
    };

    let examples: ExampleMap = match cli.target {
        Target::Requests => request_examples(&spec, &options),
        Target::Responses => response_examples(&spec, &options),
        Target::Definitions => definition_examples(&spec, &options),
    };

    let rendered = if cli.compact {
        serde_json::to_string(&examples)?
    } else {
        serde_json::to_string_pretty(&examples)?
    };
    println!("{rendered}");

    Ok(())
}

fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
