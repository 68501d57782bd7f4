//! 設定ファイルテスト

use tempfile::tempdir;
use voucher_reader::config::Config;

/// 設定ファイルがなければ既定値
#[test]
fn test_load_missing_file_uses_defaults() {
    let dir = tempdir().expect("Failed to create temp dir");
    let config = Config::load_from(&dir.path().join("config.json")).unwrap();
    assert_eq!(config, Config::default());
}

/// 保存と読み込み
#[test]
fn test_save_and_load() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("nested").join("config.json");

    let config = Config {
        base_url: "http://localhost:3000".to_string(),
        timeout_seconds: 10,
        allow_pdf: true,
        clipboard_hold_seconds: 0,
        ..Default::default()
    };
    config.save_to(&path).expect("設定保存失敗");

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded, config);
    assert!(loaded.accept_policy().allow_pdf);
    assert_eq!(loaded.clipboard_hold_seconds, 0);
    assert_eq!(loaded.accept_policy().hint(), "Soporta: JPG, PNG, PDF (MAX. 5MB)");
}

/// 壊れた設定ファイル
#[test]
fn test_load_invalid_json() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").unwrap();

    assert!(Config::load_from(&path).is_err());
}
