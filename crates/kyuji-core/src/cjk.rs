// crates/kyuji-core/src/cjk.rs

/// Lowest code point treated as a kanji candidate (CJK Unified Ideographs).
pub const MIN_CJK: u32 = 0x4E00;

/// Highest code point treated as a kanji candidate (end of Extension D).
pub const MAX_CJK: u32 = 0x2B81D;

/// Whether `c` is inside the fixed kanji range. Everything outside it is
/// passed through by the normalizer without a dictionary lookup.
///
/// The range is a contiguous span, so it also covers the non-ideograph blocks
/// that sit between the CJK blocks (Hangul, compatibility forms, ...).
#[inline]
pub fn is_in_scope(c: char) -> bool {
    (MIN_CJK..=MAX_CJK).contains(&(c as u32))
}
