// crates/kyuji-core/src/source.rs
//
// Labeled JSON source dictionary.
//
// {
//   "27005": {
//     "joyo_kanji": "楽",
//     "kyu_jitai": "樂",
//     "yomi": { "on_yomi": [...], "kun_yomi": [...], "example_yomi": [...] },
//     "raw_info": "..."
//   }
// }
//
// The label is the decimal code point of joyo_kanji. Multi-character strings
// keep their first character. Unknown fields (raw_info) are ignored.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{KyujiError, Result};
use crate::record::{CharRecord, Readings};

#[derive(Debug, Default, Serialize, Deserialize)]
struct SourceYomi {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    on_yomi: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    kun_yomi: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    example_yomi: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct SourceEntry {
    #[serde(default)]
    joyo_kanji: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    kyu_jitai: String,
    #[serde(default)]
    yomi: SourceYomi,
}

/// Decode a labeled JSON source into canonical records sorted by code point.
pub fn parse_json(text: &str) -> Result<Vec<CharRecord>> {
    let entries: BTreeMap<String, SourceEntry> = serde_json::from_str(text)?;

    let mut out = Vec::with_capacity(entries.len());
    for (label, entry) in entries {
        out.push(entry_to_record(&label, entry)?);
    }
    out.sort_by_key(|r| r.modern);
    Ok(out)
}

pub fn parse_slice(bytes: &[u8]) -> Result<Vec<CharRecord>> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| KyujiError::Source(format!("source is not utf-8: {e}")))?;
    parse_json(text)
}

/// Encode canonical records back into the labeled source format.
/// Alias records are skipped.
pub fn to_json<'a, I>(records: I, pretty: bool) -> Result<String>
where
    I: IntoIterator<Item = &'a CharRecord>,
{
    let mut entries = BTreeMap::new();
    for r in records.into_iter().filter(|r| !r.is_alias) {
        let entry = SourceEntry {
            joyo_kanji: r.modern.to_string(),
            kyu_jitai: r.obsolete.map(String::from).unwrap_or_default(),
            yomi: SourceYomi {
                on_yomi: r.readings.on.clone(),
                kun_yomi: r.readings.kun.clone(),
                example_yomi: r.readings.example.clone(),
            },
        };
        entries.insert((r.modern as u32).to_string(), entry);
    }

    let s = if pretty {
        serde_json::to_string_pretty(&entries)?
    } else {
        serde_json::to_string(&entries)?
    };
    Ok(s)
}

fn entry_to_record(label: &str, entry: SourceEntry) -> Result<CharRecord> {
    let modern = first_char(&entry.joyo_kanji)
        .ok_or_else(|| KyujiError::Source(format!("record {label}: empty joyo_kanji")))?;

    let code: u32 = label
        .parse()
        .map_err(|_| KyujiError::Source(format!("record {label}: label is not a decimal code point")))?;
    if code != modern as u32 {
        return Err(KyujiError::Source(format!(
            "record {label}: label does not match joyo_kanji {modern} ({})",
            modern as u32
        )));
    }

    let obsolete = first_char(&entry.kyu_jitai);

    let readings = Readings {
        on: entry.yomi.on_yomi,
        kun: entry.yomi.kun_yomi,
        example: entry.yomi.example_yomi,
    };
    Ok(CharRecord::new(modern, obsolete, readings))
}

fn first_char(s: &str) -> Option<char> {
    s.chars().next()
}
