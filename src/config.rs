use crate::error::{BallotFinderError, Result};
use ballot_finder_common::DEFAULT_EXTENSION;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// config.json の内容（起動時に1回だけ読み込む、読み取り専用）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub primary_dir: String,
    pub backup_dir: String,
    /// 表示名 → 言語ディレクトリ名（記述順。先頭が既定）
    pub languages: IndexMap<String, String>,
    /// 表示名 → ファイル名に含まれる種別コード（記述順。先頭が既定）
    pub ballot_types: IndexMap<String, String>,
    #[serde(default = "default_true")]
    pub case_insensitive: bool,
    #[serde(default)]
    pub log_in_app_dir: bool,
    #[serde(default = "default_extension")]
    pub document_extension: String,
}

fn default_true() -> bool {
    true
}

fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

impl Config {
    /// 指定パス、なければ実行ファイルと同じディレクトリの config.json を読み込む
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let config_path = match explicit {
            Some(path) => path.to_path_buf(),
            None => Self::default_path(),
        };
        Self::load_from(&config_path)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Err(BallotFinderError::ConfigNotFound(
                config_path.display().to_string(),
            ));
        }

        let content = std::fs::read_to_string(config_path)?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn default_path() -> PathBuf {
        app_base_dir().join(CONFIG_FILE_NAME)
    }

    fn validate(&self) -> Result<()> {
        if self.languages.is_empty() {
            return Err(BallotFinderError::Config("`languages` must not be empty".into()));
        }
        if self.ballot_types.is_empty() {
            return Err(BallotFinderError::Config("`ballot_types` must not be empty".into()));
        }
        Ok(())
    }

    /// 言語の表示名からディレクトリ名を引く
    pub fn language_dir(&self, display_name: &str) -> Result<&str> {
        self.languages
            .get(display_name)
            .map(String::as_str)
            .ok_or_else(|| {
                BallotFinderError::UnknownLanguage(display_name.to_string(), join_keys(&self.languages))
            })
    }

    /// 種別の表示名から種別コードを引く
    pub fn ballot_code(&self, display_name: &str) -> Result<&str> {
        self.ballot_types
            .get(display_name)
            .map(String::as_str)
            .ok_or_else(|| {
                BallotFinderError::UnknownBallotType(display_name.to_string(), join_keys(&self.ballot_types))
            })
    }
}

fn join_keys(map: &IndexMap<String, String>) -> String {
    map.keys().cloned().collect::<Vec<_>>().join(", ")
}

/// 実行ファイルのあるディレクトリ（取得できなければカレント）
pub fn app_base_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}
