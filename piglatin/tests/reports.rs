use ipa_piglatin::{Analyzer, Config, TokenReport, WordReport};

#[test]
fn word_report_json_shape() {
    let analyzer = Analyzer::default();
    let report = WordReport::analyze(&analyzer, "ˈtræp").unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["input"], "ˈtræp");
    assert_eq!(json["reconstructed"], "ˈtræp");
    assert_eq!(json["pig_latin"], "ˈæp.trei");
    let syllable = &json["syllables"][0];
    assert_eq!(syllable["text"], "ˈtræp");
    assert_eq!(syllable["onset"], "tr");
    assert_eq!(syllable["nucleus"], "æ");
    assert_eq!(syllable["coda"], "p");
    assert_eq!(syllable["stress"], "primary");
}

#[test]
fn token_report_json_shape() {
    let analyzer = Analyzer::default();
    let report = TokenReport::analyze(&analyzer, "/t\u{361}ʃa/").unwrap();
    let json = serde_json::to_value(&report).unwrap();
    let first = &json["syllables"][0][0];
    assert_eq!(first["text"], "t\u{361}ʃ");
    assert_eq!(first["category"], "consonant");
    assert_eq!(first["affricate"], true);
    assert_eq!(first["position"], 1);
}

#[test]
fn configured_analyzer_drives_the_report() {
    let config = Config::from_toml_str("pig_latin_suffix = \"ay\"\nbreak_marker = \"·\"\n").unwrap();
    let analyzer = Analyzer::new(config).unwrap();
    let report = WordReport::analyze(&analyzer, "[kæt]").unwrap();
    assert_eq!(report.pig_latin, "[æt·kay]");
}

#[test]
fn errors_render_verbatim() {
    let analyzer = Analyzer::default();
    let err = WordReport::analyze(&analyzer, "/pt/").unwrap_err();
    assert_eq!(
        err.to_string(),
        "syllable 0 (\"pt\") at position 1 has no vowel or syllabic consonant"
    );
}
