use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use evensum_benchmark::{
    Benchmark, BenchmarkConfig, BenchmarkError, ConfigError, CsvExporter, MarkdownReport,
};
use evensum_core::{DivisorSum, EvensumError, IterativeDivisorSum, RecursiveDivisorSum};
use owo_colors::OwoColorize;
use thiserror::Error;

mod console;

#[derive(Parser)]
#[command(version, about = "Compare iterative and recursive even-divisor sums", long_about = None)]
struct Args {
    #[arg(
        help = "Input to compute the headline comparison for",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    n: u64,

    #[arg(
        long,
        value_delimiter = ',',
        help = "Comma-separated sweep sizes (default: 1,10,50,100,500,1000,1500,2000)"
    )]
    sizes: Option<Vec<u64>>,

    #[arg(long, help = "Benchmark configuration file (TOML, or YAML by extension)")]
    config: Option<String>,

    #[arg(long, help = "Maximum input the recursive strategy accepts")]
    depth_limit: Option<u64>,

    #[arg(long, help = "Write sweep results to this CSV file")]
    csv: Option<String>,

    #[arg(long, help = "Write a Markdown report to this file")]
    markdown: Option<String>,

    #[arg(long, help = "Skip the sweep and only run the headline comparison")]
    no_sweep: bool,

    #[arg(long, help = "Suppress the banner and chart")]
    quiet: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Benchmark error: {0}")]
    Benchmark(#[from] BenchmarkError),

    #[error("Computation error: {0}")]
    Algorithm(#[from] EvensumError),

    #[error("Report error: {0}")]
    Report(#[from] std::io::Error),
}

fn main() -> ExitCode {
    let args = Args::parse();
    console::init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", "error:".bright_red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let config = load_config(&args)?;
    config.validate()?;

    if !args.quiet {
        console::print_banner();
    }

    headline(args.n, config.depth_limit())?;

    if args.no_sweep {
        return Ok(());
    }

    let benchmark = Benchmark::from_config(config);
    let result = benchmark.run()?;

    console::print_table(&result);
    if !args.quiet {
        console::print_chart(&result);
    }

    if let Some(path) = benchmark.config().csv_output_path() {
        CsvExporter::to_file(&result, path)?;
        println!("\nCSV results written to {}", path.bright_cyan());
    }
    if let Some(path) = benchmark.config().markdown_output_path() {
        MarkdownReport::to_file(&result, path)?;
        println!("Markdown report written to {}", path.bright_cyan());
    }

    Ok(())
}

/// Times both strategies once on the headline input and prints the panel.
///
/// A recursive depth-limit rejection is part of the demonstration, so it is
/// rendered rather than propagated.
fn headline(n: u64, depth_limit: u64) -> Result<(), CliError> {
    let started = Instant::now();
    let sum = IterativeDivisorSum.sum_even_divisors(n)?;
    let iterative = (sum, started.elapsed());

    let recursive_strategy = RecursiveDivisorSum::with_depth_limit(depth_limit);
    let started = Instant::now();
    let recursive = recursive_strategy
        .sum_even_divisors(n)
        .map(|sum| (sum, started.elapsed()));

    console::print_comparison(n, iterative, &recursive);
    Ok(())
}

/// Builds the effective configuration: file values first, flags override.
fn load_config(args: &Args) -> Result<BenchmarkConfig, CliError> {
    let mut config = match args.config.as_deref() {
        Some(path) => load_config_file(path)?,
        None => BenchmarkConfig::default(),
    };

    if let Some(sizes) = &args.sizes {
        config = config.with_sizes(sizes.clone());
    }
    if let Some(limit) = args.depth_limit {
        config = config.with_depth_limit(limit);
    }
    if let Some(path) = &args.csv {
        config = config.with_csv_output(path.as_str());
    }
    if let Some(path) = &args.markdown {
        config = config.with_markdown_output(path.as_str());
    }

    Ok(config)
}

fn load_config_file(path: &str) -> Result<BenchmarkConfig, ConfigError> {
    if is_yaml_path(path) {
        BenchmarkConfig::from_yaml_file(path)
    } else {
        BenchmarkConfig::from_toml_file(path)
    }
}

fn is_yaml_path(path: &str) -> bool {
    Path::new(path)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_yaml_path() {
        assert!(is_yaml_path("sweep.yaml"));
        assert!(is_yaml_path("sweep.YML"));
        assert!(!is_yaml_path("sweep.toml"));
        assert!(!is_yaml_path("sweep"));
    }
}
