use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use glob::glob;
use tracing::debug;

/// Extensions scanned, in group order. The candidate list is the groups
/// concatenated, never interleaved.
pub const SOURCE_EXTENSIONS: &[&str] = &["tsx", "ts"];

/// Enumerate candidate files under `root`, recursively, as a flattened list
/// collected before any processing begins.
pub fn select_sources(root: &Utf8Path) -> anyhow::Result<Vec<Utf8PathBuf>> {
    let mut out = Vec::new();

    for ext in SOURCE_EXTENSIONS {
        let pattern = format!("{root}/**/*.{ext}");
        debug!(pattern = %pattern, "scanning for sources");

        for entry in glob(&pattern).with_context(|| format!("glob {pattern}"))? {
            let path = entry.map_err(|e| anyhow::anyhow!("glob error: {e}"))?;
            let path = Utf8PathBuf::from_path_buf(path)
                .map_err(|p| anyhow::anyhow!("non-utf8 path: {}", p.display()))?;
            out.push(path);
        }
    }

    debug!(count = out.len(), "candidate files");
    Ok(out)
}
