//! End-to-end tests against the live Unicode character database.
//!
//! These exercise the public API the way the CLI does: encode and decode
//! through `unicode_names2`, collate transliterations, and emit label lists
//! from a config-adjusted catalog.

use gardiner_tools::collate;
use gardiner_tools::config::GardinerConfig;
use gardiner_tools::error::{CollationError, GardinerError, SignError};
use gardiner_tools::glyph::{
    self, CharacterDatabase, FixedCatalog, GardinerCode, SignCodec, SignList, UnicodeDatabase,
    WriteMode,
};

#[test]
fn encode_a1_is_the_first_hieroglyph() {
    let glyphs = glyph::encode("A1").unwrap();
    assert_eq!(glyphs, "\u{13000}");
    assert_eq!(
        UnicodeDatabase
            .name_for_character('\u{13000}')
            .as_deref(),
        Some("EGYPTIAN HIEROGLYPH A001")
    );
}

#[test]
fn encode_sequence_keeps_order() {
    assert_eq!(
        glyph::encode("A1-D21-Aa1").unwrap(),
        "\u{13000}\u{1308B}\u{1340D}"
    );
}

#[test]
fn encode_resolves_variants() {
    assert_eq!(glyph::encode("A6a").unwrap(), "\u{13007}");
    assert_eq!(glyph::encode("NU11a").unwrap(), "\u{13242}");
}

#[test]
fn decode_of_encode_round_trips() {
    assert_eq!(glyph::decode(&glyph::encode("A1-D21").unwrap()).unwrap(), "A1,D21");
    assert_eq!(
        glyph::decode(&glyph::encode("a6a-aa31-z15a").unwrap()).unwrap(),
        "A6a,Aa31,Z15a"
    );
}

#[test]
fn round_trip_over_catalog() {
    // Every standard catalog code is encoded in Unicode and survives encode -> decode.
    let codec = SignCodec::unicode();
    let mut checked = 0;
    for code in SignList::standard().codes() {
        let ch = codec
            .glyph_for(&code)
            .unwrap_or_else(|e| panic!("{code} did not resolve: {e}"));
        assert_eq!(codec.code_for(ch).unwrap(), code);
        checked += 1;
    }
    assert_eq!(checked, SignList::standard().len());
}

#[test]
fn overlong_number_is_malformed() {
    assert!(matches!(
        glyph::encode("Z9999"),
        Err(SignError::MalformedCode { token }) if token == "Z9999"
    ));
}

#[test]
fn unknown_category_is_unknown_sign() {
    assert!(matches!(
        glyph::encode("ZZ1"),
        Err(SignError::UnknownSign { token, .. }) if token == "ZZ1"
    ));
}

#[test]
fn aa1b_resolves_through_injected_catalog() {
    // Not encoded in Unicode; a fixed catalog stands in for a newer database.
    assert!(glyph::encode("Aa1b").is_err());

    let codec = SignCodec::new(FixedCatalog::new().with('\u{F0000}', "EGYPTIAN HIEROGLYPH AA001B"));
    let glyphs = codec.encode("Aa1b").unwrap();
    assert_eq!(glyphs, "\u{F0000}");
    assert_eq!(codec.decode(&glyphs).unwrap(), "Aa1b");
}

#[test]
fn joiner_is_not_a_hieroglyph() {
    let err = glyph::decode("\u{13000}\u{13430}").unwrap_err();
    match err {
        SignError::NotAHieroglyph { codepoint, name } => {
            assert_eq!(codepoint, "U+13430");
            assert_eq!(name, "EGYPTIAN HIEROGLYPH VERTICAL JOINER");
        }
        other => panic!("expected NotAHieroglyph, got {other:?}"),
    }
}

#[test]
fn latin_text_is_not_a_hieroglyph() {
    assert!(matches!(
        glyph::decode("A1"),
        Err(SignError::NotAHieroglyph { .. })
    ));
}

#[test]
fn empty_inputs_are_empty_outputs() {
    assert_eq!(glyph::encode("").unwrap(), "");
    assert_eq!(glyph::decode("").unwrap(), "");
    assert!(collate::sort(Vec::<String>::new()).unwrap().is_empty());
}

#[test]
fn parsed_code_displays_canonically() {
    let code: GardinerCode = "aa31b".parse().unwrap();
    assert_eq!(code.to_string(), "Aa31b");
    assert!("aa31B".parse::<GardinerCode>().is_err());
}

#[test]
fn collation_orders_by_alphabet() {
    assert_eq!(collate::sort(["ḏd", "ꜥnḫ"]).unwrap(), ["ꜥnḫ", "ḏd"]);
}

#[test]
fn collation_is_stable_for_equal_keys() {
    let words = ["nfr", "Nfr", "ꜥnḫ", "NFR"];
    assert_eq!(collate::sort(words).unwrap(), ["ꜥnḫ", "nfr", "Nfr", "NFR"]);
}

#[test]
fn collation_rejects_mdc_input() {
    let err = collate::sort(["anx", "Dd"]).unwrap_err();
    assert!(matches!(
        err,
        CollationError::UnknownAlphabetSymbol { symbol: 'a', .. }
    ));
}

#[test]
fn errors_lift_into_top_level_error() {
    let err: GardinerError = glyph::encode("Z9999").unwrap_err().into();
    assert!(matches!(err, GardinerError::Sign(_)));
    let err: GardinerError = collate::sort(["9"]).unwrap_err().into();
    assert!(matches!(err, GardinerError::Collation(_)));
}

#[test]
fn config_driven_label_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let config_path = dir.path().join("config.toml");
    std::fs::write(
        &config_path,
        r#"
[labels]
append = false

[[labels.categories]]
name = "Aa"
count = 32
"#,
    )
    .unwrap();

    let config = GardinerConfig::resolve(Some(&config_path)).unwrap();
    let list = config.labels.sign_list().unwrap();
    let labels = dir.path().join("labels.txt");
    std::fs::write(&labels, "old\n").unwrap();

    let written = list
        .write_labels(&labels, config.labels.write_mode())
        .unwrap();
    assert_eq!(written, SignList::standard().len() + 1);

    let content = std::fs::read_to_string(&labels).unwrap();
    assert!(!content.contains("old"));
    assert!(content.ends_with("Aa31\nAa32\n"));

    // Every label the catalog writes parses back as a Gardiner code.
    for line in content.lines() {
        GardinerCode::parse(line).unwrap();
    }
}

#[test]
fn labels_append_across_runs() {
    let dir = tempfile::TempDir::new().unwrap();
    let labels = dir.path().join("labels.txt");
    let list = SignList::standard();
    list.write_labels(&labels, WriteMode::Append).unwrap();
    list.write_labels(&labels, WriteMode::Append).unwrap();
    let content = std::fs::read_to_string(&labels).unwrap();
    assert_eq!(content.lines().count(), 2 * list.len());
}
