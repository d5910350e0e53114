use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use vec2jsonl::{ConvertConfig, DEFAULT_COLUMN, DEFAULT_INPUT, DEFAULT_OUTPUT, convert};

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Extract a numeric vector column from a Parquet file into line-delimited compact JSON"
)]
struct Args {
    /// Path to the Parquet file containing the vector column.
    #[arg(long, default_value = DEFAULT_INPUT)]
    input: std::path::PathBuf,

    /// Path of the JSONL file to write (one JSON array per line).
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    output: std::path::PathBuf,

    /// Name of the column holding one numeric vector per row.
    #[arg(long, default_value = DEFAULT_COLUMN)]
    column: String,
}

fn main() -> ExitCode {
    // Status messages go to stdout; they are informational only.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stdout)
        .init();

    let args = Args::parse();
    let config = ConvertConfig {
        input: args.input,
        output: args.output,
        column: args.column,
    };

    if let Err(err) = config.validate() {
        error!("invalid configuration: {err}");
        return ExitCode::from(2);
    }

    match convert(&config) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
