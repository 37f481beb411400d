//! 実行時コンテキスト
//!
//! 設定・状態ディレクトリ・ログパスを起動時に1回だけ組み立て、
//! 必要なコンポーネントへ明示的に渡す。

use crate::config::{app_base_dir, Config};
use crate::locator::SearchTier;
use crate::logging::compute_log_path;
use crate::state::StateFile;
use ballot_finder_common::normalize_root;
use std::path::{Path, PathBuf};

const STATE_DIR_NAME: &str = ".ballotlookup";
const STATE_FILE_NAME: &str = "state.json";

/// アプリが読み書きするディレクトリ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    /// config.json の置き場所（実行ファイルの隣）
    pub app_dir: PathBuf,
    /// ユーザーごとの状態・ログ置き場（~/.ballotlookup）
    pub state_dir: PathBuf,
}

impl AppPaths {
    pub fn new(app_dir: impl Into<PathBuf>, state_dir: impl Into<PathBuf>) -> Self {
        Self {
            app_dir: app_dir.into(),
            state_dir: state_dir.into(),
        }
    }

    /// config.json の場所を app_dir とし、状態はホーム配下に置く
    pub fn discover(config_path: Option<&Path>) -> Self {
        let app_dir = config_path
            .and_then(Path::parent)
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(app_base_dir);

        let state_dir = dirs::home_dir()
            .map(|home| home.join(STATE_DIR_NAME))
            .unwrap_or_else(|| app_dir.join(STATE_DIR_NAME));

        Self { app_dir, state_dir }
    }

    pub fn state_file(&self) -> PathBuf {
        self.state_dir.join(STATE_FILE_NAME)
    }
}

#[derive(Debug, Clone)]
pub struct AppContext {
    pub config: Config,
    pub paths: AppPaths,
}

impl AppContext {
    pub fn new(config: Config, paths: AppPaths) -> Self {
        Self { config, paths }
    }

    pub fn log_path(&self) -> PathBuf {
        compute_log_path(&self.config, &self.paths)
    }

    pub fn load_state(&self) -> StateFile {
        StateFile::load(&self.paths.state_file())
    }

    /// 検索ティア（優先順）。パスは展開・正規化済み
    pub fn tiers(&self) -> Vec<SearchTier> {
        vec![
            SearchTier::new("primary", normalize_root(&self.config.primary_dir)),
            SearchTier::new("backup", normalize_root(&self.config.backup_dir)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discover_uses_config_parent_as_app_dir() {
        let paths = AppPaths::discover(Some(Path::new("/opt/ballots/config.json")));
        assert_eq!(paths.app_dir, PathBuf::from("/opt/ballots"));
        assert!(paths.state_dir.ends_with(STATE_DIR_NAME));
    }

    #[test]
    fn test_state_file_location() {
        let paths = AppPaths::new("/app", "/home/clerk/.ballotlookup");
        assert_eq!(paths.state_file(), PathBuf::from("/home/clerk/.ballotlookup/state.json"));
    }
}
