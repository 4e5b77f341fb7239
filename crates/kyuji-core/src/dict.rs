// crates/kyuji-core/src/dict.rs

use std::collections::HashMap;

use crate::artifact;
use crate::cjk;
use crate::error::Result;
use crate::record::CharRecord;
use crate::source;
use crate::supplemental;

/// Normalization dictionary: canonical records keyed by their modern form,
/// plus one alias entry per obsolete form keyed by that obsolete form.
///
/// Immutable once built.
#[derive(Clone, Debug, Default)]
pub struct Dictionary {
    entries: HashMap<char, CharRecord>,
}

impl Dictionary {
    /// Build from canonical records. Alias entries are derived here; any
    /// `is_alias` records in the input are ignored.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = CharRecord>,
    {
        let mut entries: HashMap<char, CharRecord> = HashMap::new();
        for rec in records.into_iter().filter(|r| !r.is_alias) {
            if let Some(prev) = entries.insert(rec.modern, rec) {
                log::warn!(
                    "duplicate record for {} (U+{:04X}); keeping the later one",
                    prev.modern,
                    prev.modern as u32
                );
            }
        }

        // Collect aliases separately, then merge. An alias may overwrite a
        // canonical key.
        let mut aliases: HashMap<char, CharRecord> = HashMap::new();
        for rec in entries.values() {
            if let Some((key, alias)) = rec.alias() {
                aliases.insert(key, alias);
            }
        }

        for (key, alias) in aliases {
            if let Some(prev) = entries.insert(key, alias) {
                log::warn!(
                    "obsolete form {} (U+{:04X}) overwrites the record for {}",
                    key,
                    key as u32,
                    prev.modern
                );
            }
        }

        Self { entries }
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(Self::from_records(source::parse_json(text)?))
    }

    pub fn from_artifact(bytes: &[u8]) -> Result<Self> {
        Ok(Self::from_records(artifact::decode(bytes)?))
    }

    pub fn find(&self, c: char) -> Option<&CharRecord> {
        self.entries.get(&c)
    }

    /// Map `c` to its joyo form.
    ///
    /// 1. outside the kanji range: unchanged
    /// 2. not in the dictionary: supplemental table, else unchanged
    /// 3. canonical entry: unchanged
    /// 4. alias entry: its modern form
    pub fn fix_as_joyo(&self, c: char) -> char {
        if !cjk::is_in_scope(c) {
            return c;
        }

        let Some(rec) = self.entries.get(&c) else {
            return supplemental::lookup(c).unwrap_or(c);
        };

        if !rec.is_alias {
            return c;
        }

        if rec.modern == '\0' {
            log::warn!(
                "alias entry for U+{:04X} has no modern form; leaving it unchanged",
                c as u32
            );
            return c;
        }
        rec.modern
    }

    pub fn is_modern_form(&self, c: char) -> bool {
        self.entries.get(&c).is_some_and(|r| r.modern == c)
    }

    pub fn is_obsolete_form(&self, c: char) -> bool {
        self.entries.get(&c).is_some_and(|r| r.obsolete == Some(c)) || supplemental::contains(c)
    }

    /// Number of canonical (non-alias) entries. Scans the table on every call.
    pub fn count(&self) -> usize {
        self.entries.values().filter(|r| !r.is_alias).count()
    }

    /// Number of keys, aliases included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn on_readings(&self, c: char) -> &[String] {
        self.find(c).map(|r| r.readings.on.as_slice()).unwrap_or(&[])
    }

    pub fn kun_readings(&self, c: char) -> &[String] {
        self.find(c).map(|r| r.readings.kun.as_slice()).unwrap_or(&[])
    }

    pub fn example_readings(&self, c: char) -> &[String] {
        self.find(c)
            .map(|r| r.readings.example.as_slice())
            .unwrap_or(&[])
    }

    /// Canonical records in ascending code point order.
    pub fn canonical_records(&self) -> impl Iterator<Item = &CharRecord> {
        let mut recs: Vec<&CharRecord> = self.entries.values().filter(|r| !r.is_alias).collect();
        recs.sort_by_key(|r| r.modern);
        recs.into_iter()
    }

    pub fn to_source_json(&self) -> Result<String> {
        source::to_json(self.canonical_records(), false)
    }

    pub fn to_source_json_pretty(&self) -> Result<String> {
        source::to_json(self.canonical_records(), true)
    }

    pub fn to_artifact(&self, compress: bool, level: i32) -> Result<Vec<u8>> {
        artifact::encode(self.canonical_records(), compress, level)
    }
}
