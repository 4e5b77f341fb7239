// crates/kyuji-core/src/embedded.rs
//
// Joyo kanji dictionary (2010 list) packed by build.rs and compiled in.

use std::sync::OnceLock;

use crate::artifact;
use crate::dict::Dictionary;
use crate::error::Result;

static ARTIFACT: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/joyo2010.kjd"));

static DICT: OnceLock<Dictionary> = OnceLock::new();

/// Raw bytes of the embedded artifact.
pub fn artifact_bytes() -> &'static [u8] {
    ARTIFACT
}

/// The embedded dictionary, decoded on first use.
///
/// A corrupt artifact is reported on every call; there is no fallback table.
pub fn dictionary() -> Result<&'static Dictionary> {
    if let Some(d) = DICT.get() {
        return Ok(d);
    }

    let dict = Dictionary::from_artifact(ARTIFACT)?;
    let id = artifact::dictionary_id_hex(ARTIFACT)?;
    log::debug!(
        "embedded dictionary loaded: records={} keys={} id={id}",
        dict.count(),
        dict.len()
    );
    Ok(DICT.get_or_init(|| dict))
}
