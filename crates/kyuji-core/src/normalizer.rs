// crates/kyuji-core/src/normalizer.rs

use std::io::{BufReader, Read, Write};
use std::path::Path;

use crate::dict::Dictionary;
use crate::embedded;
use crate::error::Result;
use crate::ignore::IgnoreSet;
use crate::stream::{self, NormalizingReader, StreamStats};

/// Caller-owned normalization context: a shared dictionary plus this
/// caller's own ignore set.
///
/// Cloning is cheap (a reference and a set), so threads that need their own
/// exemptions each take a clone.
#[derive(Clone, Debug)]
pub struct Normalizer<'d> {
    dict: &'d Dictionary,
    ignore: IgnoreSet,
}

impl<'d> Normalizer<'d> {
    pub fn new(dict: &'d Dictionary) -> Self {
        Self {
            dict,
            ignore: IgnoreSet::new(),
        }
    }

    pub fn dictionary(&self) -> &'d Dictionary {
        self.dict
    }

    pub fn normalize_char(&self, c: char) -> char {
        if self.ignore.contains(c) {
            return c;
        }
        self.dict.fix_as_joyo(c)
    }

    pub fn normalize_str(&self, s: &str) -> String {
        s.chars().map(|c| self.normalize_char(c)).collect()
    }

    /// Drain `source` into `sink`, normalizing every character on the way.
    pub fn normalize_stream<R: Read, W: Write>(&self, source: R, sink: W) -> Result<StreamStats> {
        stream::copy(self.reader(source), sink)
    }

    pub fn normalize_file(&self, input: &Path, output: &Path) -> Result<StreamStats> {
        stream::copy_file(self, input, output)
    }

    /// A reader that yields the normalized bytes of `source`.
    pub fn reader<R: Read>(&self, source: R) -> NormalizingReader<'_, 'd, BufReader<R>> {
        NormalizingReader::new(self, BufReader::with_capacity(stream::COPY_BUF, source))
    }

    pub fn is_modern_form(&self, c: char) -> bool {
        self.dict.is_modern_form(c)
    }

    pub fn is_obsolete_form(&self, c: char) -> bool {
        self.dict.is_obsolete_form(c)
    }

    /// Number of canonical dictionary entries.
    pub fn dictionary_size(&self) -> usize {
        self.dict.count()
    }

    /// Exempt `chars` from normalization. Adds to any earlier exemptions.
    pub fn ignore<I>(&mut self, chars: I)
    where
        I: IntoIterator<Item = char>,
    {
        self.ignore.add(chars);
    }

    pub fn reset_ignore(&mut self) {
        self.ignore.clear();
    }

    pub fn ignored(&self) -> &IgnoreSet {
        &self.ignore
    }
}

impl Normalizer<'static> {
    /// Normalizer over the dictionary compiled into the crate.
    pub fn embedded() -> Result<Self> {
        Ok(Self::new(embedded::dictionary()?))
    }
}
