use bidscat_core::cli::{Cli, OutputFormat};
use bidscat_core::{Result, SeriesClassifier, SeriesInfo, TextReport};
use clap::Parser;
use log::{info, LevelFilter};
use std::path::Path;
use std::process;

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match run(&cli.file, &cli.format) {
        Ok(output) => print!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn run(file: &Path, format: &OutputFormat) -> Result<String> {
    let input = std::fs::read_to_string(file)?;
    let series: Vec<SeriesInfo> = serde_json::from_str(&input)?;
    info!("Loaded {} series from {}", series.len(), file.display());

    let result = SeriesClassifier::classify(&series)?;
    info!("Classified {} series", result.total_classified());

    let output = match format {
        OutputFormat::Text => format!("{}", TextReport::new(&result)),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&result)?;
            json.push('\n');
            json
        }
    };
    Ok(output)
}

fn setup_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}
