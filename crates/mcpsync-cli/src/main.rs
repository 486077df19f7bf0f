//! mcpsync - MCP server list synchronizer
//!
//! Usage:
//!   mcpsync                 # Auto-select the fullest of copilot/claude/gemini.json
//!   mcpsync claude.json     # Rewrite copilot.json and gemini.json from claude.json
//!   mcpsync --list          # Show what auto-selection would see

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mcpsync_core::commands::{SyncCommand, SyncOptions, SyncReport};
use mcpsync_core::config::render_document;
use mcpsync_core::dialect::Dialect;
use mcpsync_core::select::{Candidate, pick, survey};

#[derive(Parser)]
#[command(name = "mcpsync")]
#[command(about = "Convert MCP configuration files between Copilot, Claude and Gemini", long_about = None)]
struct Cli {
    /// The source configuration file (e.g., copilot.json, claude.json, gemini.json)
    ///
    /// When omitted, the file listing the most servers is used.
    source: Option<PathBuf>,

    /// Directory containing the configuration files
    #[arg(short = 'C', long, value_name = "DIR")]
    dir: Option<PathBuf>,

    /// Print the converted documents instead of writing them
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// List candidate files and their server counts, then exit
    #[arg(long, conflicts_with_all = ["source", "dry_run"])]
    list: bool,
}

fn main() -> Result<()> {
    // Logs go to stderr so dry-run output stays clean JSON
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mcpsync=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if cli.list {
        let dir = cli.dir.unwrap_or_else(|| PathBuf::from("."));
        print_candidates(&dir);
        return Ok(());
    }

    run_sync(cli)
}

fn run_sync(cli: Cli) -> Result<()> {
    let mut options = SyncOptions::new().with_dry_run(cli.dry_run);
    if let Some(dir) = cli.dir {
        options = options.with_working_dir(dir);
    }
    if let Some(source) = cli.source {
        options = options.with_source(source);
    }
    tracing::debug!("Running sync with {:?}", options);

    let report = SyncCommand::new(options).run()?;
    print_report(&report)
}

fn print_report(report: &SyncReport) -> Result<()> {
    if report.auto_selected {
        println!(
            "Automatically selected {} as the source.",
            report.source.display()
        );
    }

    for output in &report.outputs {
        if output.written {
            continue;
        }
        println!("# {}", output.path.display());
        println!("{}", render_document(&output.document.to_value())?);
    }

    if report.outputs.iter().all(|output| output.written) {
        println!("{}", report.summary());
    }
    Ok(())
}

fn print_candidates(dir: &Path) {
    let candidates = survey(dir);
    let selected = pick(&candidates).map(|candidate| candidate.dialect);

    println!("{:<16} {:<10} {:>8}", "FILE", "STATUS", "SERVERS");
    for candidate in &candidates {
        println!("{}", format_candidate(candidate, selected));
    }
    if selected.is_none() {
        println!("No valid configuration files found.");
    }
}

fn format_candidate(candidate: &Candidate, selected: Option<Dialect>) -> String {
    let (status, count) = match candidate.server_count() {
        Some(count) => ("ok", count.to_string()),
        None => ("absent", "-".to_string()),
    };
    let marker = if selected == Some(candidate.dialect) {
        "  <- source"
    } else {
        ""
    };
    format!(
        "{:<16} {:<10} {:>8}{}",
        candidate.dialect.file_name(),
        status,
        count,
        marker
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn no_arguments_parses_as_auto_mode() {
        let cli = Cli::try_parse_from(["mcpsync"]).unwrap();
        assert!(cli.source.is_none());
        assert!(!cli.dry_run);
        assert!(!cli.list);
    }

    #[test]
    fn positional_source_parses() {
        let cli = Cli::try_parse_from(["mcpsync", "claude.json"]).unwrap();
        assert_eq!(cli.source, Some(PathBuf::from("claude.json")));
    }

    #[test]
    fn dir_and_dry_run_flags_parse() {
        let cli = Cli::try_parse_from(["mcpsync", "-C", "/tmp/cfg", "-n", "gemini.json"]).unwrap();
        assert_eq!(cli.dir, Some(PathBuf::from("/tmp/cfg")));
        assert!(cli.dry_run);
        assert_eq!(cli.source, Some(PathBuf::from("gemini.json")));
    }

    #[test]
    fn list_conflicts_with_source() {
        let result = Cli::try_parse_from(["mcpsync", "--list", "claude.json"]);
        assert!(result.is_err(), "--list with a source should be rejected");
    }

    #[test]
    fn extra_positional_is_rejected() {
        let result = Cli::try_parse_from(["mcpsync", "claude.json", "gemini.json"]);
        assert!(result.is_err());
    }

    #[test]
    fn format_candidate_marks_selected_source() {
        let candidate = Candidate {
            dialect: Dialect::Claude,
            path: PathBuf::from("claude.json"),
            root: json!({"mcpServers": {"a": {}, "b": {}}}).as_object().cloned(),
        };

        let line = format_candidate(&candidate, Some(Dialect::Claude));

        assert!(line.starts_with("claude.json"));
        assert!(line.contains(" ok "));
        assert!(line.ends_with("2  <- source"));
    }

    #[test]
    fn format_candidate_shows_absent_file() {
        let candidate = Candidate {
            dialect: Dialect::Gemini,
            path: PathBuf::from("gemini.json"),
            root: None,
        };

        let line = format_candidate(&candidate, Some(Dialect::Claude));

        assert!(line.contains("absent"));
        assert!(line.trim_end().ends_with('-'));
    }
}
