// crates/kyuji-cli/src/io/dict_file.rs

use std::borrow::Cow;

use anyhow::{Context, Result};
use kyuji_core::{artifact, embedded, source, Dictionary};

/// Load a dictionary from a .kjd artifact or a JSON source, sniffed by magic.
/// `None` selects the embedded dictionary.
pub fn load(path: Option<&str>) -> Result<Cow<'static, Dictionary>> {
    let Some(path) = path else {
        let dict = embedded::dictionary().context("load embedded dictionary")?;
        return Ok(Cow::Borrowed(dict));
    };

    let bytes = std::fs::read(path).with_context(|| format!("read dictionary {path}"))?;
    let dict = if artifact::is_artifact(&bytes) {
        Dictionary::from_artifact(&bytes).with_context(|| format!("decode artifact {path}"))?
    } else {
        let records =
            source::parse_slice(&bytes).with_context(|| format!("parse source {path}"))?;
        Dictionary::from_records(records)
    };
    log::debug!("dictionary {path}: records={} keys={}", dict.count(), dict.len());
    Ok(Cow::Owned(dict))
}

/// Raw artifact bytes from `path`, or the embedded artifact.
pub fn read_artifact(path: Option<&str>) -> Result<Cow<'static, [u8]>> {
    match path {
        None => Ok(Cow::Borrowed(embedded::artifact_bytes())),
        Some(path) => {
            let bytes = std::fs::read(path).with_context(|| format!("read artifact {path}"))?;
            Ok(Cow::Owned(bytes))
        }
    }
}
