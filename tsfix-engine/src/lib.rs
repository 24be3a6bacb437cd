//! Rewrite engine for tsfix.
//!
//! Responsibilities:
//! - Enumerate candidate sources under a root (two extension groups,
//!   concatenated, never interleaved).
//! - Fold the ordered rule catalog over each file's text.
//! - Persist only when content actually changed; contain failures at file
//!   granularity so one bad file never aborts the run.

mod engine;
mod selector;

pub use engine::{
    FileDisposition, FileOutcome, RewriteError, WriteOptions, process_file, rewrite_text,
};
pub use selector::{SOURCE_EXTENSIONS, select_sources};
