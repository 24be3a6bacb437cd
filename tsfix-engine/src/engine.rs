use camino::Utf8Path;
use diffy::PatchFormatter;
use fs_err as fs;
use thiserror::Error;
use tracing::debug;
use tsfix_rules::RewriteRule;

/// Write-back behavior for one run.
#[derive(Debug, Clone, Copy, Default)]
pub struct WriteOptions {
    /// When true, nothing is written; outcomes carry a patch preview instead.
    pub dry_run: bool,
}

/// Change-gate verdict for one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileDisposition {
    /// Content changed; written back (or would be, in a dry run).
    Fixed,
    /// Catalog output was byte-identical to the original; nothing written.
    Unchanged,
}

/// Result of pushing one file through the full catalog.
#[derive(Debug, Clone)]
pub struct FileOutcome {
    pub disposition: FileDisposition,
    /// Unified diff of the change. Rendered in dry-run mode only.
    pub patch: Option<String>,
}

/// A failure scoped to one file. The run continues past these.
#[derive(Debug, Error, Clone)]
pub enum RewriteError {
    #[error("read {path}: {message}")]
    Read { path: String, message: String },

    #[error("write {path}: {message}")]
    Write { path: String, message: String },
}

/// Fold the ordered catalog over one file's text. Pure; no I/O.
pub fn rewrite_text(rules: &[RewriteRule], text: &str) -> String {
    rules.iter().fold(text.to_string(), |acc, rule| {
        let out = rule.apply(&acc);
        if out != acc {
            debug!(rule = rule.name, "rule changed text");
        }
        out
    })
}

/// Load one file as strict UTF-8, apply every rule in catalog order, and
/// write back (same encoding) only when the final text differs from the
/// original.
pub fn process_file(
    path: &Utf8Path,
    rules: &[RewriteRule],
    opts: &WriteOptions,
) -> Result<FileOutcome, RewriteError> {
    let original = fs::read_to_string(path).map_err(|e| RewriteError::Read {
        path: path.to_string(),
        message: e.to_string(),
    })?;

    let rewritten = rewrite_text(rules, &original);
    if rewritten == original {
        return Ok(FileOutcome {
            disposition: FileDisposition::Unchanged,
            patch: None,
        });
    }

    let patch = if opts.dry_run {
        Some(render_patch(path, &original, &rewritten))
    } else {
        fs::write(path, &rewritten).map_err(|e| RewriteError::Write {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        None
    };

    Ok(FileOutcome {
        disposition: FileDisposition::Fixed,
        patch,
    })
}

fn render_patch(path: &Utf8Path, before: &str, after: &str) -> String {
    let formatter = PatchFormatter::new();
    let mut out = String::new();

    out.push_str(&format!("diff --git a/{0} b/{0}\n", path));
    out.push_str(&format!("--- a/{0}\n+++ b/{0}\n", path));

    let patch = diffy::create_patch(before, after);
    out.push_str(&formatter.fmt_patch(&patch).to_string());
    if !out.ends_with('\n') {
        out.push('\n');
    }

    out
}
