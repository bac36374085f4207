//! Command-line surface of Contact Gatherer
//!
//! `main` only parses arguments, installs logging and hands over to [`run`].
//! Any error returned from [`run`] ends the process with exit code 1; a run
//! in which single websites could not be crawled still succeeds.

use crate::config::{load_settings, Settings};
use crate::gatherer::gather_all;
use crate::input::read_input_urls;
use crate::output::{export_records, log_statistics, ExportFormat, RunStatistics};
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

/// Contact Gatherer: extract emails, phones, and social profiles from websites
///
/// Each website listed in the input file is crawled for a handful of pages
/// (contact and about pages first), and the contact details found are
/// exported as one record per website.
#[derive(Parser, Debug, Clone)]
#[command(name = "contact-gatherer")]
#[command(version = "1.0.0")]
#[command(about = "Extract emails, phones, and social profiles from websites", long_about = None)]
pub struct Cli {
    /// Path to text file containing one URL per line
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Path to output file (extension should match format when possible)
    #[arg(short, long, value_name = "FILE")]
    pub output: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = ExportFormat::Json)]
    pub format: ExportFormat,

    /// Path to settings file (TOML, or JSON when the extension is .json)
    #[arg(short, long, value_name = "FILE", default_value = "config/settings.example.toml")]
    pub config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Show the resolved settings and URLs without crawling
    #[arg(long)]
    pub dry_run: bool,
}

/// Runs one gathering pass as described by the command line
///
/// # Returns
///
/// * `Ok(())` - Every URL was processed (possibly with empty results) and the
///   records were exported
/// * `Err(_)` - The input file is missing or holds no URL, the HTTP client
///   could not be built, or the export failed
pub async fn run(cli: &Cli) -> anyhow::Result<()> {
    tracing::info!("Starting Website Contact Gatherer");

    let settings = load_settings(Some(&cli.config));

    let urls = read_input_urls(&cli.input).map_err(|e| {
        tracing::error!("Failed to read input URLs: {}", e);
        e
    })?;

    if cli.dry_run {
        handle_dry_run(&settings, &urls, cli);
        return Ok(());
    }

    let records = gather_all(&urls, &settings).await?;
    log_statistics(&RunStatistics::from_records(&records));

    export_records(&records, &cli.output, cli.format)
        .with_context(|| format!("Failed to export results to {}", cli.output.display()))?;

    tracing::info!("Completed Website Contact Gatherer run.");
    Ok(())
}

/// Handles the --dry-run mode: shows what would be crawled
fn handle_dry_run(settings: &Settings, urls: &[String], cli: &Cli) {
    println!("=== Contact Gatherer Dry Run ===\n");

    println!("Settings:");
    println!("  User agent: {}", settings.user_agent);
    println!("  Request timeout: {}s", settings.request_timeout);
    println!("  Max pages per site: {}", settings.max_pages);
    println!("  Concurrency: {}", settings.concurrency);

    println!("\nOutput:");
    println!("  Path: {}", cli.output.display());
    println!("  Format: {:?}", cli.format);

    println!("\nURLs ({}):", urls.len());
    for url in urls {
        println!("  - {}", url);
    }

    println!(
        "\n✓ Would fetch at most {} pages",
        urls.len() * settings.max_pages
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{tempdir, TempDir};

    fn write_input(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("urls.txt");
        std::fs::write(&path, content).unwrap();
        path
    }

    fn cli_for(input: PathBuf, output: PathBuf, format: ExportFormat) -> Cli {
        Cli {
            input,
            output,
            format,
            config: PathBuf::from("/nonexistent/settings.toml"),
            verbose: 0,
            quiet: true,
            dry_run: false,
        }
    }

    #[test]
    fn test_parse_arguments() {
        let cli = Cli::try_parse_from([
            "contact-gatherer",
            "-i",
            "urls.txt",
            "-o",
            "out.xlsx",
            "--format",
            "excel",
            "-vv",
        ])
        .unwrap();

        assert_eq!(cli.input, PathBuf::from("urls.txt"));
        assert_eq!(cli.format, ExportFormat::Xlsx);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, PathBuf::from("config/settings.example.toml"));
        assert!(!cli.dry_run);
    }

    #[test]
    fn test_input_and_output_required() {
        assert!(Cli::try_parse_from(["contact-gatherer", "-i", "urls.txt"]).is_err());
        assert!(Cli::try_parse_from(["contact-gatherer", "-o", "out.json"]).is_err());
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        let result =
            Cli::try_parse_from(["contact-gatherer", "-i", "a", "-o", "b", "-q", "-v"]);
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_missing_input_file_fails() {
        let dir = tempdir().unwrap();
        let cli = cli_for(
            dir.path().join("absent.txt"),
            dir.path().join("out.json"),
            ExportFormat::Json,
        );

        assert!(run(&cli).await.is_err());
        assert!(!dir.path().join("out.json").exists());
    }

    #[tokio::test]
    async fn test_comment_only_input_fails() {
        let dir = tempdir().unwrap();
        let input = write_input(&dir, "# nothing here\n\n   \n");
        let cli = cli_for(input, dir.path().join("out.json"), ExportFormat::Json);

        let error = run(&cli).await.unwrap_err();
        assert!(error.to_string().contains("No URLs found"));
    }

    #[tokio::test]
    async fn test_dry_run_writes_nothing() {
        let dir = tempdir().unwrap();
        let input = write_input(&dir, "http://127.0.0.1:9\n");
        let output = dir.path().join("out.json");
        let cli = Cli {
            dry_run: true,
            ..cli_for(input, output.clone(), ExportFormat::Json)
        };

        run(&cli).await.unwrap();
        assert!(!output.exists());
    }

    #[tokio::test]
    async fn test_failed_website_still_succeeds() {
        let dir = tempdir().unwrap();
        let input = write_input(&dir, "http://127.0.0.1:9\n");
        let output = dir.path().join("out.json");
        let cli = cli_for(input, output.clone(), ExportFormat::Json);

        run(&cli).await.unwrap();

        let written = std::fs::read_to_string(&output).unwrap();
        assert!(written.contains("\"url\": \"http://127.0.0.1:9\""));
    }

    #[tokio::test]
    async fn test_unwritable_output_fails() {
        let dir = tempdir().unwrap();
        let input = write_input(&dir, "http://127.0.0.1:9\n");
        let output = dir.path().join("missing-dir").join("out.csv");
        let cli = cli_for(input, output, ExportFormat::Csv);

        let error = run(&cli).await.unwrap_err();
        assert!(error.to_string().contains("Failed to export results"));
    }
}
