// crates/kyuji-core/src/supplemental.rs
//
// Obsolete forms that the joyo source does not register, mapped to their
// modern form. Consulted only when the dictionary has no entry.

/// (obsolete, modern), sorted by obsolete code point.
static PAIRS: &[(char, char)] = &[
    ('\u{4E99}', '\u{4E98}'), // 亙 -> 亘
    ('\u{51B1}', '\u{51B4}'), // 冱 -> 冴
    ('\u{51DB}', '\u{51DC}'), // 凛 -> 凜
    ('\u{582F}', '\u{5C2D}'), // 堯 -> 尭
    ('\u{5DD6}', '\u{5DCC}'), // 巖 -> 巌
    ('\u{6649}', '\u{664B}'), // 晉 -> 晋
    ('\u{69C7}', '\u{69D9}'), // 槇 -> 槙
    ('\u{7464}', '\u{7476}'), // 瑤 -> 瑶
    ('\u{74E3}', '\u{5F01}'), // 瓣 -> 弁
    ('\u{797F}', '\u{7984}'), // 祿 -> 禄
    ('\u{7A70}', '\u{7A63}'), // 穰 -> 穣
    ('\u{8070}', '\u{8061}'), // 聰 -> 聡
    ('\u{8420}', '\u{840C}'), // 萠 -> 萌
    ('\u{85EA}', '\u{85AE}'), // 藪 -> 薮
    ('\u{8FAF}', '\u{5F01}'), // 辯 -> 弁
    ('\u{9059}', '\u{9065}'), // 遙 -> 遥
    ('\u{9089}', '\u{8FBA}'), // 邉 -> 辺
    ('\u{9B2A}', '\u{95D8}'), // 鬪 -> 闘
    ('\u{FA16}', '\u{732A}'), // 猪 (compatibility) -> 猪
];

pub fn lookup(c: char) -> Option<char> {
    PAIRS
        .binary_search_by_key(&c, |&(old, _)| old)
        .ok()
        .map(|idx| PAIRS[idx].1)
}

pub fn contains(c: char) -> bool {
    lookup(c).is_some()
}

pub fn pairs() -> &'static [(char, char)] {
    PAIRS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_sorted_and_unique() {
        assert!(PAIRS.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn no_entry_maps_to_itself() {
        assert!(PAIRS.iter().all(|(old, new)| old != new));
    }
}
