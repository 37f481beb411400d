//! 診断ログ
//!
//! 1行1エントリ、追記のみ。`log` マクロを `env_logger` 経由でファイルへ流す。

use crate::config::Config;
use crate::context::AppPaths;
use crate::error::Result;
use chrono::Local;
use env_logger::{Builder, Target};
use log::{info, LevelFilter};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const LOG_FILE_NAME: &str = "ballotfinder.log";

/// `log_in_app_dir` が true ならアプリの隣、そうでなければユーザー状態ディレクトリ
pub fn compute_log_path(config: &Config, paths: &AppPaths) -> PathBuf {
    if config.log_in_app_dir {
        paths.app_dir.join(LOG_FILE_NAME)
    } else {
        paths.state_dir.join(LOG_FILE_NAME)
    }
}

/// ログファイルを作成し、グローバルロガーを設定する
///
/// 既にロガーが設定済みの場合はファイルの作成だけ行う。
/// `RUST_LOG` が設定されていればレベルを上書きする。
pub fn init_logging(log_path: &Path, verbose: bool) -> Result<()> {
    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(log_path)?;

    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Info };

    let installed = Builder::new()
        .filter_level(level)
        .parse_default_env()
        .target(Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S,%3f"),
                record.level(),
                record.args()
            )
        })
        .try_init()
        .is_ok();

    if installed {
        info!("=== App start ===");
        info!("Log file: {}", log_path.display());
    }
    Ok(())
}
