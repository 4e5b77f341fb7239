// crates/kyuji-core/src/ignore.rs

use std::collections::HashSet;

/// Characters exempt from normalization. No allocation until the first add.
#[derive(Clone, Debug, Default)]
pub struct IgnoreSet {
    chars: Option<HashSet<char>>,
}

impl IgnoreSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add<I>(&mut self, chars: I)
    where
        I: IntoIterator<Item = char>,
    {
        self.chars.get_or_insert_with(HashSet::new).extend(chars);
    }

    /// Drop every exemption and release the set.
    pub fn clear(&mut self) {
        self.chars = None;
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.as_ref().is_some_and(|s| s.contains(&c))
    }

    pub fn len(&self) -> usize {
        self.chars.as_ref().map_or(0, HashSet::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
