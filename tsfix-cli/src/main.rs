use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use fs_err as fs;
use std::process::ExitCode;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;
use tsfix_engine::{FileDisposition, WriteOptions, process_file, select_sources};
use tsfix_rules::builtin_rules;
use tsfix_types::report::{FixReport, ToolInfo};

#[derive(Debug, Parser)]
#[command(
    name = "tsfix",
    version,
    about = "Batch repair tool for recurring TypeScript/TSX source defects."
)]
struct Cli {
    /// Project root containing the src/ tree to scan (default: current directory).
    #[arg(long, default_value = ".")]
    repo_root: Utf8PathBuf,

    /// Report what would change without writing; prints a unified diff per file.
    #[arg(long, default_value_t = false)]
    dry_run: bool,

    /// Write the final run report as JSON to this path.
    #[arg(long)]
    report_json: Option<Utf8PathBuf>,
}

fn main() -> ExitCode {
    if let Err(e) = real_main() {
        error!("{:?}", e);
        return ExitCode::from(1);
    }
    ExitCode::from(0)
}

fn real_main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let scan_root = cli.repo_root.join("src");
    let files = select_sources(&scan_root).with_context(|| format!("scan {scan_root}"))?;
    let rules = builtin_rules().context("build rule catalog")?;

    let opts = WriteOptions {
        dry_run: cli.dry_run,
    };
    let mut report = FixReport::new(tool_info());

    for path in &files {
        debug!(path = %path, "processing");
        match process_file(path, &rules, &opts) {
            Ok(outcome) => match outcome.disposition {
                FileDisposition::Fixed => {
                    if cli.dry_run {
                        println!("would fix: {path}");
                        if let Some(patch) = &outcome.patch {
                            print!("{patch}");
                        }
                    } else {
                        println!("fixed: {path}");
                    }
                    report.record_fixed(path.clone());
                }
                FileDisposition::Unchanged => report.record_unchanged(),
            },
            Err(e) => {
                error!(path = %path, "{e}");
                report.record_failure(path.clone(), e.to_string());
            }
        }
    }

    report.finish();
    println!(
        "done: {} files scanned, {} fixed",
        report.summary.files_scanned, report.summary.files_fixed
    );

    if let Some(out) = &cli.report_json {
        write_json(out, &report)?;
        debug!(path = %out, "wrote run report");
    }

    Ok(())
}

fn write_json<T: serde::Serialize>(path: &Utf8Path, v: &T) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(v).context("serialize json")?;
    fs::write(path, s).with_context(|| format!("write {path}"))?;
    Ok(())
}

fn tool_info() -> ToolInfo {
    ToolInfo {
        name: "tsfix".to_string(),
        version: Some(env!("CARGO_PKG_VERSION").to_string()),
    }
}
