use clap::{CommandFactory, FromArgMatches, Parser};
use keywalk::config::Config;
use keywalk::consts::SIMILARITY_THRESHOLD;
use keywalk::cost::StrategyKind;
use keywalk::engine::WalkEngine;
use keywalk::layout::LayoutKind;
use keywalk::KeyWalkError;
use std::fs;
use tempfile::tempdir;

#[derive(Parser, Debug)]
struct TestCli {
    #[command(flatten)]
    config: Config,
}

#[test]
fn test_defaults() {
    let config = Config::default();
    assert_eq!(config.analysis.layout_kind().unwrap(), LayoutKind::Qwerty);
    assert_eq!(config.analysis.strategy_kind().unwrap(), None);
    assert!(!config.analysis.back_references);
    assert_eq!(config.analysis.back_reference_window, 32);
    assert_eq!(config.analysis.min_password_len, 4);
    assert_eq!(config.grouping.similarity_threshold, SIMILARITY_THRESHOLD);
}

#[test]
fn test_partial_file_fills_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("keywalk.json");
    fs::write(&path, r#"{"analysis": {"strategy": "Gaming"}}"#).unwrap();

    let config = Config::load_from_file(&path).unwrap();
    assert_eq!(config.analysis.strategy_kind().unwrap(), Some(StrategyKind::Gaming));
    assert_eq!(config.analysis.layout_kind().unwrap(), LayoutKind::Qwerty);
    assert_eq!(config.grouping.similarity_threshold, SIMILARITY_THRESHOLD);
}

#[test]
fn test_invalid_values_are_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(&path, r#"{"analysis": {"layout": "colemak"}}"#).unwrap();
    assert!(matches!(Config::load_from_file(&path), Err(KeyWalkError::Config(_))));

    fs::write(&path, r#"{"grouping": {"similarity_threshold": 1.5}}"#).unwrap();
    assert!(matches!(Config::load_from_file(&path), Err(KeyWalkError::Config(_))));

    assert!(matches!(
        Config::load_from_file(dir.path().join("missing.json")),
        Err(KeyWalkError::Config(_))
    ));
}

#[test]
fn test_typed_flags_override_file() {
    let matches = TestCli::command().get_matches_from(["test", "--layout", "dvorak"]);
    let cli = TestCli::from_arg_matches(&matches).unwrap();

    let mut from_file = Config::default();
    from_file.analysis.strategy = "mobile".to_string();
    from_file.analysis.min_password_len = 8;
    from_file.merge_from_cli(&cli.config, &matches);

    assert_eq!(from_file.analysis.layout, "dvorak");
    assert_eq!(from_file.analysis.strategy, "mobile");
    assert_eq!(from_file.analysis.min_password_len, 8);
}

#[test]
fn test_engine_from_params() {
    let mut config = Config::default();
    config.analysis.layout = "dvorak".to_string();
    config.analysis.strategy = "standard".to_string();
    let engine = WalkEngine::from_params(&config.analysis).unwrap();
    assert_eq!(engine.layout().kind(), LayoutKind::Dvorak);
    assert_eq!(engine.finder().strategy().map(|s| s.name()), Some("standard"));
    // "aoeu" is the Dvorak home row.
    assert_eq!(engine.fingerprint("aoeu").as_str(), "►");
}
