use crate::error::{Result, VoucherError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use voucher_reader_common::{AcceptPolicy, Endpoints, DEFAULT_BASE_URL, MAX_FILE_SIZE_BYTES};

/// 接続先の上書き用環境変数
pub const BASE_URL_ENV: &str = "VOUCHER_READER_BASE_URL";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub base_url: String,
    pub timeout_seconds: u64,
    pub allow_pdf: bool,
    pub max_file_size_bytes: u64,
    /// 単発コマンド終了前にクリップボードを保持する秒数（0で保持しない）
    pub clipboard_hold_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            timeout_seconds: 60,  // 無料枠ホストのコールドスタート対策
            allow_pdf: false,
            max_file_size_bytes: MAX_FILE_SIZE_BYTES,
            clipboard_hold_seconds: 30,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| VoucherError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("voucher-reader").join("config.json"))
    }

    /// 接続先ベースURL（環境変数を優先）
    pub fn resolved_base_url(&self) -> String {
        match std::env::var(BASE_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => url,
            _ => self.base_url.clone(),
        }
    }

    pub fn endpoints(&self) -> Endpoints {
        Endpoints::new(self.resolved_base_url())
    }

    pub fn accept_policy(&self) -> AcceptPolicy {
        AcceptPolicy {
            allow_pdf: self.allow_pdf,
            max_size_bytes: self.max_file_size_bytes,
        }
    }

    pub fn set_base_url(&mut self, url: String) -> Result<()> {
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(VoucherError::Config(format!("URLが不正です: {}", url)));
        }
        self.base_url = url;
        self.save()
    }
}
