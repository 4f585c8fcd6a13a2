//! Colorful console output for benchmark results.
//!
//! Renders the headline comparison panel, the sweep table, and a two-series
//! bar chart. Tracing output goes through an `EnvFilter` set up once.

use std::io::{self, Write};
use std::sync::OnceLock;
use std::time::Duration;

use evensum_benchmark::{format_duration, SweepResult};
use evensum_core::EvensumError;
use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

static INIT: OnceLock<()> = OnceLock::new();

const PANEL_WIDTH: usize = 58;
const MAX_BAR_WIDTH: usize = 40;

/// Initializes tracing output for the benchmark harness.
///
/// Safe to call multiple times - only the first call has effect.
pub fn init() {
    INIT.get_or_init(|| {
        let filter = EnvFilter::from_default_env()
            .add_directive("evensum_benchmark=info".parse().unwrap());

        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    });
}

/// Prints the evensum banner.
pub fn print_banner() {
    let banner = r#"
  _____   _____ _ __  ___ _   _ _ __ ___
 / _ \ \ / / _ \ '_ \/ __| | | | '_ ` _ \
|  __/\ V /  __/ | | \__ \ |_| | | | | | |
 \___| \_/ \___|_| |_|___/\__,_|_| |_| |_|
"#;

    let version_line = format!(
        "        v{} - Iterative vs Recursive Divisor Sums\n",
        env!("CARGO_PKG_VERSION")
    );

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", banner.bright_cyan());
    let _ = writeln!(stdout, "{}", version_line.bright_white().bold());
    let _ = stdout.flush();
}

/// Prints the headline comparison panel for a single input.
///
/// The recursive side may have been declined over the depth limit; that
/// shows as a red marker instead of a timing.
pub fn print_comparison(
    n: u64,
    iterative: (u64, Duration),
    recursive: &Result<(u64, Duration), EvensumError>,
) {
    let top = "╔══════════════════════════════════════════════════════════╗";
    let mid = "╠══════════════════════════════════════════════════════════╣";
    let bottom = "╚══════════════════════════════════════════════════════════╝";

    let title = format!(
        "Even divisor sum for n = {}",
        n.to_formatted_string(&Locale::en)
    );
    let padding = PANEL_WIDTH.saturating_sub(title.len());
    let left_pad = padding / 2;
    let right_pad = padding - left_pad;

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", top.bright_cyan());
    let _ = writeln!(
        stdout,
        "{}{}{}{}{}",
        "║".bright_cyan(),
        " ".repeat(left_pad),
        title.bright_white().bold(),
        " ".repeat(right_pad),
        "║".bright_cyan()
    );
    let _ = writeln!(stdout, "{}", mid.bright_cyan());

    let value = headline_value(iterative.0, iterative.1);
    let _ = writeln!(
        stdout,
        "{}  {:<18}{}  {}",
        "║".bright_cyan(),
        "Iterative:",
        format!("{:>36}", value).bright_yellow(),
        "║".bright_cyan()
    );

    match recursive {
        Ok((sum, duration)) => {
            let value = headline_value(*sum, *duration);
            let _ = writeln!(
                stdout,
                "{}  {:<18}{}  {}",
                "║".bright_cyan(),
                "Recursive:",
                format!("{:>36}", value).bright_yellow(),
                "║".bright_cyan()
            );
        }
        Err(EvensumError::StackExhausted { limit, .. }) => {
            let value = format!(
                "skipped: n exceeds depth limit {}",
                limit.to_formatted_string(&Locale::en)
            );
            let _ = writeln!(
                stdout,
                "{}  {:<18}{}  {}",
                "║".bright_cyan(),
                "Recursive:",
                format!("{:>36}", value).bright_red(),
                "║".bright_cyan()
            );
        }
        Err(err) => {
            let _ = writeln!(
                stdout,
                "{}  {:<18}{}  {}",
                "║".bright_cyan(),
                "Recursive:",
                format!("{:>36}", err).bright_red(),
                "║".bright_cyan()
            );
        }
    }

    let _ = writeln!(stdout, "{}", bottom.bright_cyan());
    let _ = stdout.flush();
}

/// Prints the sweep table, one row per sample.
pub fn print_table(result: &SweepResult) {
    let mut stdout = io::stdout().lock();

    let header = format!(
        "{:>10}  {:>12}  {:>12}  {:>12}  {:>8}",
        "n", "Sum", "Iterative", "Recursive", "Ratio"
    );

    let _ = writeln!(stdout);
    let _ = writeln!(stdout, "{}", header.bright_cyan().bold());

    for sample in &result.samples {
        let recursive = sample
            .duration_recursive
            .map(format_duration)
            .unwrap_or_else(|| "N/A".to_string());
        let ratio = sample
            .slowdown()
            .map(|r| format!("{:.2}x", r))
            .unwrap_or_else(|| "N/A".to_string());

        let _ = writeln!(
            stdout,
            "{:>10}  {:>12}  {:>12}  {:>12}  {:>8}",
            sample.input_size.to_formatted_string(&Locale::en),
            sample.sum.to_formatted_string(&Locale::en),
            format_duration(sample.duration_iterative),
            recursive,
            ratio,
        );
    }
    let _ = stdout.flush();
}

/// Prints a horizontal bar chart of the sweep, both series per input size.
pub fn print_chart(result: &SweepResult) {
    if result.samples.is_empty() {
        return;
    }

    let max = result.max_duration();
    let mut stdout = io::stdout().lock();

    let _ = writeln!(stdout);
    let _ = writeln!(
        stdout,
        "  {}   {} {}   {} {}",
        "Sweep timings".bright_white().bold(),
        "██".blue(),
        "iterative",
        "██".magenta(),
        "recursive"
    );
    let _ = writeln!(stdout);

    for sample in &result.samples {
        let bar = "█".repeat(bar_len(sample.duration_iterative, max));
        let _ = writeln!(
            stdout,
            "{:>10}  {} {}",
            sample.input_size.to_formatted_string(&Locale::en),
            bar.blue(),
            format_duration(sample.duration_iterative)
        );

        match sample.duration_recursive {
            Some(duration) => {
                let bar = "█".repeat(bar_len(duration, max));
                let _ = writeln!(
                    stdout,
                    "{:>10}  {} {}",
                    "",
                    bar.magenta(),
                    format_duration(duration)
                );
            }
            None => {
                let _ = writeln!(
                    stdout,
                    "{:>10}  {}",
                    "",
                    "skipped (depth limit exceeded)".bright_red()
                );
            }
        }
    }
    let _ = stdout.flush();
}

fn headline_value(sum: u64, duration: Duration) -> String {
    format!(
        "{} in {:.6} s",
        sum.to_formatted_string(&Locale::en),
        duration.as_secs_f64()
    )
}

fn bar_len(duration: Duration, max: Duration) -> usize {
    if duration.is_zero() || max.is_zero() {
        return 0;
    }
    let scaled = (duration.as_secs_f64() / max.as_secs_f64()) * MAX_BAR_WIDTH as f64;
    (scaled.ceil() as usize).clamp(1, MAX_BAR_WIDTH)
}
