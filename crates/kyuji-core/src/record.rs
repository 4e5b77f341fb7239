// crates/kyuji-core/src/record.rs

/// Readings attached to a character. Informational only; they never
/// influence normalization.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Readings {
    /// Sino-Japanese readings (katakana).
    pub on: Vec<String>,
    /// Native readings, okurigana stripped (hiragana).
    pub kun: Vec<String>,
    /// Native readings with the okurigana split off by '-', e.g. "たの-しい".
    pub example: Vec<String>,
}

impl Readings {
    pub fn is_empty(&self) -> bool {
        self.on.is_empty() && self.kun.is_empty() && self.example.is_empty()
    }
}

/// One dictionary entry.
///
/// Canonical entries are keyed by `modern`. Alias entries are synthesized at
/// load time, keyed by `obsolete`, and carry `is_alias = true`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharRecord {
    pub modern: char,
    pub obsolete: Option<char>,
    pub readings: Readings,
    pub is_alias: bool,
}

impl CharRecord {
    pub fn new(modern: char, obsolete: Option<char>, readings: Readings) -> Self {
        Self {
            modern,
            obsolete,
            readings,
            is_alias: false,
        }
    }

    /// The alias entry for this record's obsolete form, if it has one.
    pub fn alias(&self) -> Option<(char, CharRecord)> {
        let obsolete = self.obsolete?;
        let rec = CharRecord {
            modern: self.modern,
            obsolete: self.obsolete,
            readings: self.readings.clone(),
            is_alias: true,
        };
        Some((obsolete, rec))
    }
}
