// crates/kyuji-cli/src/io/out_file.rs

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use tempfile::NamedTempFile;

/// Write `bytes` to `path` through a temp file in the same directory, so the
/// target is either the old file or the complete new one.
pub fn write_atomic(path: &str, bytes: &[u8]) -> Result<()> {
    let target = Path::new(path);
    let parent = match target.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(parent)
        .with_context(|| format!("create temp file in {}", parent.display()))?;
    tmp.write_all(bytes)
        .with_context(|| format!("write temp file for {path}"))?;
    tmp.as_file()
        .sync_all()
        .with_context(|| format!("sync temp file for {path}"))?;
    tmp.persist(target)
        .with_context(|| format!("persist {path}"))?;
    Ok(())
}

/// Write to `path`, or to stdout when `path` is `None`.
pub fn write_or_stdout(path: Option<&str>, bytes: &[u8]) -> Result<()> {
    match path {
        Some(p) => write_atomic(p, bytes),
        None => {
            let mut out = std::io::stdout().lock();
            out.write_all(bytes).context("write stdout")?;
            out.flush().context("flush stdout")?;
            Ok(())
        }
    }
}
