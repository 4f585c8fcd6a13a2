//! Report generation for sweep results.

use std::fmt::Write as _;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

use crate::result::SweepResult;

/// Formats a duration at a resolution fitting its magnitude.
///
/// Sub-microsecond timings stay in nanoseconds; larger ones scale up
/// through microseconds and milliseconds to seconds.
///
/// # Example
///
/// ```
/// use evensum_benchmark::format_duration;
/// use std::time::Duration;
///
/// assert_eq!(format_duration(Duration::from_nanos(420)), "420 ns");
/// assert_eq!(format_duration(Duration::from_micros(1500)), "1.50 ms");
/// assert_eq!(format_duration(Duration::from_secs(2)), "2.00 s");
/// ```
pub fn format_duration(duration: Duration) -> String {
    let nanos = duration.as_nanos();
    if nanos < 1_000 {
        format!("{} ns", nanos)
    } else if nanos < 1_000_000 {
        format!("{:.2} µs", nanos as f64 / 1_000.0)
    } else if nanos < 1_000_000_000 {
        format!("{:.2} ms", nanos as f64 / 1_000_000.0)
    } else {
        format!("{:.2} s", duration.as_secs_f64())
    }
}

/// CSV exporter for sweep results.
///
/// Exports one row per sample with the input size, the computed sum, and
/// both timings in nanoseconds. A skipped recursive timing exports as `N/A`.
///
/// # Example
///
/// ```
/// use evensum_benchmark::{CsvExporter, SweepResult};
///
/// let result = SweepResult::new("Test", "iterative", "recursive");
/// let csv = CsvExporter::to_string(&result);
/// assert!(csv.contains("input_size,sum,iterative_ns,recursive_ns"));
/// ```
pub struct CsvExporter;

impl CsvExporter {
    /// Exports a sweep result to a CSV string.
    ///
    /// # Example
    ///
    /// ```
    /// use evensum_benchmark::{BenchmarkSample, CsvExporter, SweepResult};
    /// use std::time::Duration;
    ///
    /// let mut result = SweepResult::new("Test", "iterative", "recursive");
    /// result.add_sample(BenchmarkSample {
    ///     input_size: 10,
    ///     sum: 12,
    ///     duration_iterative: Duration::from_nanos(1500),
    ///     duration_recursive: Some(Duration::from_nanos(4000)),
    /// });
    ///
    /// let csv = CsvExporter::to_string(&result);
    /// assert!(csv.contains("10,12,1500,4000"));
    /// ```
    pub fn to_string(result: &SweepResult) -> String {
        let mut output = String::new();

        // Header
        writeln!(output, "input_size,sum,iterative_ns,recursive_ns").unwrap();

        // Data rows
        for sample in &result.samples {
            let recursive_ns = sample
                .duration_recursive
                .map(|d| d.as_nanos().to_string())
                .unwrap_or_else(|| "N/A".to_string());

            writeln!(
                output,
                "{},{},{},{}",
                sample.input_size,
                sample.sum,
                sample.duration_iterative.as_nanos(),
                recursive_ns,
            )
            .unwrap();
        }

        output
    }

    /// Exports a sweep result to a CSV file.
    pub fn to_file(result: &SweepResult, path: impl AsRef<Path>) -> io::Result<()> {
        let csv = Self::to_string(result);
        fs::write(path, csv)
    }

    /// Writes a sweep result as CSV to a writer.
    pub fn write<W: Write>(result: &SweepResult, mut writer: W) -> io::Result<()> {
        let csv = Self::to_string(result);
        writer.write_all(csv.as_bytes())
    }
}

/// Markdown report generator.
///
/// Generates a human-readable report with summary statistics and a table
/// of per-size timings.
///
/// # Example
///
/// ```
/// use evensum_benchmark::{MarkdownReport, SweepResult};
///
/// let result = SweepResult::new("Test", "iterative", "recursive");
/// let md = MarkdownReport::to_string(&result);
/// assert!(md.contains("# Benchmark: Test"));
/// ```
pub struct MarkdownReport;

impl MarkdownReport {
    /// Generates a Markdown report string.
    ///
    /// # Example
    ///
    /// ```
    /// use evensum_benchmark::{BenchmarkSample, MarkdownReport, SweepResult};
    /// use std::time::Duration;
    ///
    /// let mut result = SweepResult::new("Test", "iterative", "recursive");
    /// result.add_sample(BenchmarkSample {
    ///     input_size: 6,
    ///     sum: 8,
    ///     duration_iterative: Duration::from_nanos(800),
    ///     duration_recursive: Some(Duration::from_nanos(1600)),
    /// });
    ///
    /// let md = MarkdownReport::to_string(&result);
    /// assert!(md.contains("## Summary"));
    /// assert!(md.contains("| n | Sum | Iterative | Recursive | Ratio |"));
    /// assert!(md.contains("2.00x"));
    /// ```
    pub fn to_string(result: &SweepResult) -> String {
        let mut output = String::new();

        // Title
        writeln!(output, "# Benchmark: {}", result.name).unwrap();
        writeln!(output).unwrap();

        // Metadata
        writeln!(output, "- **Iterative**: {}", result.iterative_name).unwrap();
        writeln!(output, "- **Recursive**: {}", result.recursive_name).unwrap();
        writeln!(output, "- **Samples**: {}", result.sample_count()).unwrap();
        writeln!(output, "- **Skipped**: {}", result.skipped_count()).unwrap();
        writeln!(output).unwrap();

        // Summary
        writeln!(output, "## Summary").unwrap();
        writeln!(output).unwrap();

        if result.samples.is_empty() {
            writeln!(output, "*No samples recorded.*").unwrap();
            writeln!(output).unwrap();
            return output;
        }

        writeln!(output, "| Metric | Value |").unwrap();
        writeln!(output, "|--------|-------|").unwrap();
        writeln!(
            output,
            "| Total Iterative | {} |",
            format_duration(result.total_duration_iterative())
        )
        .unwrap();
        writeln!(
            output,
            "| Avg Iterative | {} |",
            format_duration(result.avg_duration_iterative())
        )
        .unwrap();
        writeln!(
            output,
            "| Total Recursive | {} |",
            format_duration(result.total_duration_recursive())
        )
        .unwrap();
        writeln!(
            output,
            "| Avg Recursive | {} |",
            format_duration(result.avg_duration_recursive())
        )
        .unwrap();
        writeln!(output).unwrap();

        // Detailed results
        writeln!(output, "## Sample Details").unwrap();
        writeln!(output).unwrap();
        writeln!(output, "| n | Sum | Iterative | Recursive | Ratio |").unwrap();
        writeln!(output, "|---|-----|-----------|-----------|-------|").unwrap();

        for sample in &result.samples {
            let recursive = sample
                .duration_recursive
                .map(format_duration)
                .unwrap_or_else(|| "N/A".to_string());
            let ratio = sample
                .slowdown()
                .map(|r| format!("{:.2}x", r))
                .unwrap_or_else(|| "N/A".to_string());

            writeln!(
                output,
                "| {} | {} | {} | {} | {} |",
                sample.input_size,
                sample.sum,
                format_duration(sample.duration_iterative),
                recursive,
                ratio,
            )
            .unwrap();
        }

        output
    }

    /// Writes the Markdown report to a file.
    pub fn to_file(result: &SweepResult, path: impl AsRef<Path>) -> io::Result<()> {
        let md = Self::to_string(result);
        fs::write(path, md)
    }

    /// Writes the Markdown report to a writer.
    pub fn write<W: Write>(result: &SweepResult, mut writer: W) -> io::Result<()> {
        let md = Self::to_string(result);
        writer.write_all(md.as_bytes())
    }
}
