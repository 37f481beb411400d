//! 起動時処理のテスト
//!
//! 設定ファイルの読み込み、ログファイルの作成、パス確認を検証

use ballot_finder::config::{Config, CONFIG_FILE_NAME};
use ballot_finder::context::{AppContext, AppPaths};
use ballot_finder::error::BallotFinderError;
use ballot_finder::locator::summarize_root;
use ballot_finder::logging::{init_logging, LOG_FILE_NAME};
use std::fs;
use tempfile::tempdir;

fn write_config(dir: &std::path::Path, body: &str) -> std::path::PathBuf {
    let path = dir.join(CONFIG_FILE_NAME);
    fs::write(&path, body).unwrap();
    path
}

#[test]
fn test_load_config_and_tiers() {
    let dir = tempdir().expect("Failed to create temp dir");
    let body = format!(
        r#"{{
            "primary_dir": "{}/./primary/../primary",
            "backup_dir": "{}/backup",
            "languages": {{"English": "English"}},
            "ballot_types": {{"Standard": "STND"}},
            "case_insensitive": false,
            "log_in_app_dir": true
        }}"#,
        dir.path().display(),
        dir.path().display()
    );
    let config_path = write_config(dir.path(), &body);

    let config = Config::load(Some(&config_path)).unwrap();
    assert!(!config.case_insensitive);

    let paths = AppPaths::discover(Some(&config_path));
    assert_eq!(paths.app_dir, dir.path());

    let ctx = AppContext::new(config, paths);
    let tiers = ctx.tiers();
    assert_eq!(tiers.len(), 2);
    assert_eq!(tiers[0].name, "primary");
    assert_eq!(tiers[0].root, dir.path().join("primary"));
    assert_eq!(tiers[1].root, dir.path().join("backup"));
    assert_eq!(ctx.log_path(), dir.path().join(LOG_FILE_NAME));
}

#[test]
fn test_missing_config_is_fatal() {
    let dir = tempdir().expect("Failed to create temp dir");
    let err = Config::load(Some(&dir.path().join(CONFIG_FILE_NAME))).unwrap_err();
    assert!(matches!(err, BallotFinderError::ConfigNotFound(_)));
}

#[test]
fn test_malformed_config_is_json_error() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = write_config(dir.path(), r#"{"primary_dir": "a""#);
    let err = Config::load(Some(&path)).unwrap_err();
    assert!(matches!(err, BallotFinderError::JsonParse(_)));
}

#[test]
fn test_init_logging_creates_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let log_path = dir.path().join("state").join(LOG_FILE_NAME);

    init_logging(&log_path, false).unwrap();
    assert!(log_path.exists());

    // 2回目はロガー設定済みでも失敗しない
    init_logging(&log_path, true).unwrap();
}

#[test]
fn test_summarize_configured_roots() {
    let dir = tempdir().expect("Failed to create temp dir");
    let english = dir.path().join("primary").join("English");
    fs::create_dir_all(&english).unwrap();
    fs::write(english.join("1704.123_STND.pdf"), b"%PDF-1.4").unwrap();

    let present = summarize_root(&dir.path().join("primary"), ["English", "Español"], ".pdf");
    assert_eq!(present.documents, 1);
    assert_eq!(present.missing_languages, vec!["Español".to_string()]);

    let absent = summarize_root(&dir.path().join("backup"), ["English"], ".pdf");
    assert!(absent.to_string().contains("(missing)"));
}
