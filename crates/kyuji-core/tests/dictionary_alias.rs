// crates/kyuji-core/tests/dictionary_alias.rs

use kyuji_core::{CharRecord, Dictionary, Readings};

const RAKU_JSON: &str = r#"{
    "27005": {
        "joyo_kanji": "楽",
        "kyu_jitai": "樂",
        "yomi": {
            "on_yomi": ["ガク", "ラク"],
            "kun_yomi": ["たの"],
            "example_yomi": ["たの-しい", "たの-しむ"]
        },
        "raw_info": "楽\t樂\t13\t2\t\tガク、ラク、たの-しい、たの-しむ"
    }
}"#;

fn rec(modern: char, obsolete: Option<char>) -> CharRecord {
    CharRecord::new(modern, obsolete, Readings::default())
}

#[test]
fn canonical_and_alias_entries_after_load() {
    let dict = Dictionary::from_json(RAKU_JSON).expect("load");

    let canon = dict.find('楽').expect("楽");
    assert!(!canon.is_alias);
    assert_eq!(canon.modern, '楽');
    assert_eq!(canon.obsolete, Some('樂'));
    assert_eq!(canon.readings.on, vec!["ガク", "ラク"]);
    assert_eq!(canon.readings.kun, vec!["たの"]);
    assert_eq!(canon.readings.example, vec!["たの-しい", "たの-しむ"]);

    let alias = dict.find('樂').expect("樂");
    assert!(alias.is_alias);
    assert_eq!(alias.modern, '楽');
    assert_eq!(alias.obsolete, Some('樂'));
    assert_eq!(alias.readings, canon.readings);

    assert_eq!(dict.len(), 2);
    assert_eq!(dict.count(), 1);
}

#[test]
fn fix_as_joyo_decision_steps() {
    let dict = Dictionary::from_json(RAKU_JSON).expect("load");

    // out of scope
    assert_eq!(dict.fix_as_joyo('a'), 'a');
    // absent, supplemental hit
    assert_eq!(dict.fix_as_joyo('邉'), '辺');
    // absent, no supplemental entry
    assert_eq!(dict.fix_as_joyo('猫'), '猫');
    // canonical
    assert_eq!(dict.fix_as_joyo('楽'), '楽');
    // alias
    assert_eq!(dict.fix_as_joyo('樂'), '楽');
}

#[test]
fn out_of_range_keys_are_never_replaced() {
    let dict = Dictionary::from_records(vec![rec('a', Some('b'))]);

    let alias = dict.find('b').expect("alias for b");
    assert!(alias.is_alias);
    assert_eq!(alias.modern, 'a');
    assert_eq!(dict.fix_as_joyo('b'), 'b');
    assert_eq!(dict.fix_as_joyo('a'), 'a');
}

#[test]
fn old_form_equal_to_modern_form_loads_from_json_and_records() {
    // The alias overwrites its own canonical entry; the character maps to itself.
    let json = r#"{ "27005": { "joyo_kanji": "楽", "kyu_jitai": "楽" } }"#;
    let from_json = Dictionary::from_json(json).expect("load");
    let from_records = Dictionary::from_records(vec![rec('楽', Some('楽'))]);

    for dict in [&from_json, &from_records] {
        assert!(dict.find('楽').is_some_and(|r| r.is_alias));
        assert_eq!(dict.fix_as_joyo('楽'), '楽');
        assert_eq!(dict.count(), 0);
    }
}

#[test]
fn form_predicates() {
    let dict = Dictionary::from_json(RAKU_JSON).expect("load");

    assert!(dict.is_modern_form('楽'));
    assert!(!dict.is_modern_form('樂'));
    assert!(!dict.is_modern_form('猫'));

    assert!(dict.is_obsolete_form('樂'));
    assert!(!dict.is_obsolete_form('楽'));
    assert!(dict.is_obsolete_form('邉'));
    assert!(!dict.is_obsolete_form('猫'));
}

#[test]
fn readings_are_empty_when_not_found() {
    let json = r#"{
        "32905": { "joyo_kanji": "肉", "yomi": { "on_yomi": ["ニク"] } },
        "32908": { "joyo_kanji": "肌", "yomi": { "kun_yomi": ["はだ"] } }
    }"#;
    let dict = Dictionary::from_json(json).expect("load");

    assert_eq!(dict.on_readings('肉'), ["ニク"]);
    assert!(dict.kun_readings('肉').is_empty());
    assert_eq!(dict.kun_readings('肌'), ["はだ"]);
    assert!(dict.on_readings('肌').is_empty());
    assert!(dict.example_readings('肌').is_empty());
    assert!(dict.on_readings('猫').is_empty());
}

#[test]
fn obsolete_form_lookup_shares_readings() {
    let dict = Dictionary::from_json(RAKU_JSON).expect("load");
    assert_eq!(dict.on_readings('樂'), dict.on_readings('楽'));
    assert_eq!(dict.example_readings('樂'), ["たの-しい", "たの-しむ"]);
}

#[test]
fn alias_may_overwrite_canonical_key() {
    // '学' registers '學' as its old form, and a second record claims '學'
    // as its modern form. The alias wins.
    let dict = Dictionary::from_records(vec![rec('学', Some('學')), rec('學', None)]);

    let got = dict.find('學').expect("學");
    assert!(got.is_alias);
    assert_eq!(got.modern, '学');
    assert_eq!(dict.fix_as_joyo('學'), '学');
    assert_eq!(dict.count(), 1);
}

#[test]
fn nul_modern_form_is_never_emitted() {
    let dict = Dictionary::from_records(vec![rec('\0', Some('樂'))]);
    assert!(dict.find('樂').is_some_and(|r| r.is_alias));
    assert_eq!(dict.fix_as_joyo('樂'), '樂');
}

#[test]
fn input_alias_records_are_rebuilt_not_trusted() {
    let mut bogus = rec('楽', Some('樂'));
    bogus.is_alias = true;
    let dict = Dictionary::from_records(vec![bogus, rec('猫', None)]);

    assert!(dict.find('楽').is_none());
    assert!(dict.find('樂').is_none());
    assert_eq!(dict.count(), 1);
}

#[test]
fn canonical_records_are_sorted_and_skip_aliases() {
    let dict = Dictionary::from_records(vec![
        rec('楽', Some('樂')),
        rec('一', None),
        rec('学', Some('學')),
    ]);

    let got: Vec<char> = dict.canonical_records().map(|r| r.modern).collect();
    assert_eq!(got, vec!['一', '学', '楽']);
}

#[test]
fn export_strips_aliases_and_reloads() {
    let dict = Dictionary::from_json(RAKU_JSON).expect("load");
    let json = dict.to_source_json().expect("export");

    assert!(json.contains("\"27005\""));
    assert!(!json.contains(&format!("\"{}\"", '樂' as u32)));
    assert!(!json.contains("raw_info"));

    let again = Dictionary::from_json(&json).expect("reload");
    assert_eq!(again.len(), dict.len());
    assert_eq!(again.find('樂'), dict.find('樂'));
    assert_eq!(again.find('楽'), dict.find('楽'));
}

#[test]
fn empty_dictionary_only_applies_supplemental() {
    let dict = Dictionary::default();
    assert!(dict.is_empty());
    assert_eq!(dict.count(), 0);
    assert_eq!(dict.fix_as_joyo('樂'), '樂');
    assert_eq!(dict.fix_as_joyo('鬪'), '闘');
}
