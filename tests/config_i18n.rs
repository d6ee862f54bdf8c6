use std::fs;

use lca_impact_calculator::config::{self, Config};
use lca_impact_calculator::i18n::{self, keys, Language, Translator};
use lca_impact_calculator::ui_cli::resolve_selection;

#[test]
fn missing_config_is_created_with_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let cfg = config::load_or_create(&path).unwrap();
    assert_eq!(cfg, Config::default());
    assert!(path.exists());
    assert_eq!(cfg.language, "auto");
    assert_eq!(cfg.default_material, "ammonia");
    assert_eq!(cfg.default_energy, "natural_gas");
}

#[test]
fn saved_config_is_loaded_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let cfg = Config {
        language: "ko".into(),
        reference_data_path: Some("data/reference.toml".into()),
        default_energy: "coal".into(),
        window_alpha: 0.8,
        ..Config::default()
    };
    cfg.save_to(&path).unwrap();
    assert_eq!(config::load_or_create(&path).unwrap(), cfg);
}

#[test]
fn partial_config_keeps_other_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "language = \"en\"\n").unwrap();
    let cfg = config::load_or_create(&path).unwrap();
    assert_eq!(cfg.language, "en");
    assert_eq!(cfg.report_file_name, "lca_report.pdf");
    assert_eq!(cfg.window_alpha, 1.0);
}

#[test]
fn broken_config_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "language = [").unwrap();
    assert!(matches!(
        config::load_or_create(&path),
        Err(config::ConfigError::Parse(_))
    ));
}

#[test]
fn report_path_falls_back_to_default_name() {
    let cfg = Config {
        report_file_name: "  ".into(),
        ..Config::default()
    };
    assert!(cfg.report_path_in("out").ends_with("lca_report.pdf"));
}

#[test]
fn translator_language_and_fallback() {
    assert_eq!(Translator::new("ko-KR").language(), Language::Ko);
    assert_eq!(Translator::new("fr").language(), Language::En);
    assert_eq!(Translator::default().t(keys::REPORT_TITLE), "LCA Environmental Impact Report");
    assert_eq!(Translator::new("ko").t(keys::REPORT_TITLE), "LCA 환경영향 보고서");
    assert_eq!(Translator::new("en").t("no.such.key"), "");
}

#[test]
fn language_pack_overrides_builtin_strings() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("en.toml"),
        "[report]\ntitle = \"Plant LCA Report\"\n",
    )
    .unwrap();
    let tr = Translator::new_with_pack("en", dir.path().to_str());
    assert_eq!(tr.t(keys::REPORT_TITLE), "Plant LCA Report");
    assert_eq!(tr.lookup(keys::REPORT_TITLE).as_deref(), Some("Plant LCA Report"));
    assert_eq!(tr.t(keys::REPORT_RESULTS), "Impact Results:");
}

#[test]
fn language_pack_flattens_nested_tables() {
    let map = i18n::parse_toml_to_map("[a]\nb = \"x\"\n[a.c]\nd = \"y\"\nn = 3\n").unwrap();
    assert_eq!(map.get("a.b").map(String::as_str), Some("x"));
    assert_eq!(map.get("a.c.d").map(String::as_str), Some("y"));
    assert_eq!(map.len(), 2);
    assert!(i18n::parse_toml_to_map("n = 1").is_none());
}

#[test]
fn templates_and_language_resolution() {
    assert_eq!(
        i18n::fill_template("Score: {score}/10", &[("score", "7".into())]),
        "Score: 7/10"
    );
    assert_eq!(i18n::resolve_language("ko", Some("en")), "ko");
    assert_eq!(i18n::resolve_language("auto", Some("en_US")), "en");
}

#[test]
fn menu_selection_by_number_name_or_default() {
    let ids = ["ethylene", "ammonia", "hydrogen"];
    assert_eq!(resolve_selection("", &ids, "ammonia"), Some("ammonia"));
    assert_eq!(resolve_selection("3", &ids, "ammonia"), Some("hydrogen"));
    assert_eq!(resolve_selection("Hydrogen", &ids, "ammonia"), Some("hydrogen"));
    assert_eq!(resolve_selection("0", &ids, "ammonia"), None);
    assert_eq!(resolve_selection("4", &ids, "ammonia"), None);
    assert_eq!(resolve_selection("", &ids, "coal"), None);
}
