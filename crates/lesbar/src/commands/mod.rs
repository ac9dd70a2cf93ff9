//! Command implementations.

use anyhow::Context;
use camino::Utf8Path;

pub mod counts;
pub mod info;
pub mod score;

/// Read a document, rejecting files over the configured size limit.
///
/// The limit is checked against file metadata first so an oversized file is
/// never pulled into memory.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    if let Some(max) = max_bytes {
        let size = std::fs::metadata(path.as_std_path())
            .with_context(|| format!("failed to read {path}"))?
            .len();
        if size > max as u64 {
            anyhow::bail!("{path} is {size} bytes, over the {max}-byte input limit");
        }
    }

    std::fs::read_to_string(path.as_std_path()).with_context(|| format!("failed to read {path}"))
}
