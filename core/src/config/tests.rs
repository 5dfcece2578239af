use super::*;
use tempfile::tempdir;

#[test]
fn load_missing_file_returns_defaults() {
    let tmp = tempdir().unwrap();
    let config = SpecConfig::load(&SpecConfig::path(tmp.path())).unwrap();
    assert_eq!(config, SpecConfig::default());
    assert_eq!(config.results.count_per_page, DEFAULT_RESULT_COUNT_PER_PAGE);
    assert_eq!(config.results.order, Order::Descending);
}

#[test]
fn save_then_load() {
    let tmp = tempdir().unwrap();
    let path = SpecConfig::path(tmp.path());
    let mut config = SpecConfig::default();
    config.results.order = Order::Ascending;
    config.results.ranking_strategy = RankingStrategy::CreationTimestamp;
    config.snippets.count = 3;
    config.snippets.max_size = 120;

    config.save(&path).unwrap();
    assert_eq!(SpecConfig::load(&path).unwrap(), config);
}

#[test]
fn partial_file_fills_defaults() {
    let tmp = tempdir().unwrap();
    let path = SpecConfig::path(tmp.path());
    std::fs::write(
        &path,
        "[results]\nranking_strategy = \"document_score\"\n\n[snippets]\ncount = 5\n",
    )
    .unwrap();

    let config = SpecConfig::load(&path).unwrap();
    assert_eq!(
        config.results.ranking_strategy,
        RankingStrategy::DocumentScore
    );
    assert_eq!(config.results.order, Order::Descending);
    assert_eq!(config.results.count_per_page, DEFAULT_RESULT_COUNT_PER_PAGE);
    assert_eq!(config.snippets.count, 5);
    assert_eq!(config.snippets.count_per_property, 0);
}

#[test]
fn load_rejects_unknown_enum_name() {
    let tmp = tempdir().unwrap();
    let path = SpecConfig::path(tmp.path());
    std::fs::write(&path, "[results]\norder = \"sideways\"\n").unwrap();

    assert!(matches!(SpecConfig::load(&path), Err(SpecConfigError::Parse(_))));
}

#[test]
fn validate_reports_negative_values() {
    let mut config = SpecConfig::default();
    assert!(config.validate().is_empty());

    config.results.count_per_page = -1;
    config.snippets.max_size = -5;
    let errors = config.validate();
    assert_eq!(errors.len(), 2);
    assert!(errors[0].contains("results.count_per_page"));
    assert!(errors[1].contains("snippets.max_size"));
}

#[test]
fn with_defaults_for_invalid_replaces_only_invalid_values() {
    let mut config = SpecConfig::default();
    config.results.order = Order::Ascending;
    config.results.count_per_page = -1;
    config.snippets.count = 4;
    config.snippets.count_per_property = -2;

    let fixed = config.with_defaults_for_invalid();
    assert!(fixed.validate().is_empty());
    assert_eq!(fixed.results.order, Order::Ascending);
    assert_eq!(fixed.results.count_per_page, DEFAULT_RESULT_COUNT_PER_PAGE);
    assert_eq!(fixed.snippets.count, 4);
    assert_eq!(fixed.snippets.count_per_property, 0);
}

#[test]
fn load_full_file() {
    let tmp = tempdir().unwrap();
    let path = SpecConfig::path(tmp.path());
    std::fs::write(
        &path,
        r#"
[results]
order = "ascending"
ranking_strategy = "creation_timestamp"
count_per_page = 40

[snippets]
count = 4
count_per_property = 2
max_size = 256
"#,
    )
    .unwrap();

    let config = SpecConfig::load(&path).unwrap();
    assert_eq!(config.results.order, Order::Ascending);
    assert_eq!(
        config.results.ranking_strategy,
        RankingStrategy::CreationTimestamp
    );
    assert_eq!(config.results.count_per_page, 40);
    assert_eq!(config.snippets.count, 4);
    assert_eq!(config.snippets.count_per_property, 2);
    assert_eq!(config.snippets.max_size, 256);
}

#[test]
fn load_rejects_unknown_top_level_key() {
    let tmp = tempdir().unwrap();
    let path = SpecConfig::path(tmp.path());
    std::fs::write(
        &path,
        "default_order = \"ascending\"\ndefault_snippet_count = 4\n",
    )
    .unwrap();

    assert!(matches!(SpecConfig::load(&path), Err(SpecConfigError::Parse(_))));
}

#[test]
fn load_rejects_misspelled_table_key() {
    let tmp = tempdir().unwrap();
    let path = SpecConfig::path(tmp.path());
    std::fs::write(&path, "[snippets]\nmax_snipet_size = 10\n").unwrap();

    assert!(matches!(SpecConfig::load(&path), Err(SpecConfigError::Parse(_))));
}

#[test]
fn path_uses_config_file_name() {
    let tmp = tempdir().unwrap();
    assert_eq!(
        SpecConfig::path(tmp.path()),
        tmp.path().join(CONFIG_FILE_NAME)
    );
}
