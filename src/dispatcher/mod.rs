//! ファイルを開く・印刷する
//!
//! OSごとの実装は起動時に1つ選び、`Dispatcher` トレイトとして渡す。
//! 印刷ジョブの完了は追跡しない。

mod platform;
mod runner;

pub use platform::{MacDispatcher, UnixDispatcher, WindowsDispatcher};
pub use runner::{CommandRunner, CommandStatus, SystemRunner};

use crate::error::{BallotFinderError, Result};
use log::warn;
use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    MacOs,
    Unix,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else if cfg!(target_os = "macos") {
            Platform::MacOs
        } else {
            Platform::Unix
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchAction {
    Open,
    Print,
}

impl fmt::Display for DispatchAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchAction::Open => write!(f, "open"),
            DispatchAction::Print => write!(f, "print"),
        }
    }
}

pub trait Dispatcher {
    fn platform(&self) -> Platform;

    /// 既定のビューアで開く
    fn open(&self, path: &Path) -> Result<()>;

    /// 既定の印刷コマンドに渡す
    fn print(&self, path: &Path) -> Result<()>;

    /// ファイルブラウザで表示
    fn reveal(&self, path: &Path) -> Result<()>;
}

pub fn dispatcher_for(platform: Platform, runner: Box<dyn CommandRunner>) -> Box<dyn Dispatcher> {
    match platform {
        Platform::Windows => Box::new(WindowsDispatcher::new(runner)),
        Platform::MacOs => Box::new(MacDispatcher::new(runner)),
        Platform::Unix => Box::new(UnixDispatcher::new(runner)),
    }
}

/// 実行中のOS向けの実装
pub fn system_dispatcher() -> Box<dyn Dispatcher> {
    dispatcher_for(Platform::current(), Box::new(SystemRunner))
}

/// 開く／印刷を実行する
///
/// コマンドが起動できない等の失敗はログに残して握りつぶす。
/// 印刷ハンドラ未登録（`PrintHandlerMissing`）だけは呼び出し側に返す。
pub fn act(dispatcher: &dyn Dispatcher, path: &Path, action: DispatchAction) -> Result<()> {
    let result = match action {
        DispatchAction::Open => dispatcher.open(path),
        DispatchAction::Print => dispatcher.print(path),
    };

    match result {
        Err(e @ BallotFinderError::PrintHandlerMissing(_)) => Err(e),
        Err(e) => {
            warn!("Failed to {} {}: {}", action, path.display(), e);
            Ok(())
        }
        Ok(()) => Ok(()),
    }
}

pub(crate) fn launch(runner: &dyn CommandRunner, program: &str, args: &[String]) -> Result<CommandStatus> {
    runner.run(program, args).map_err(|e| {
        BallotFinderError::Io(std::io::Error::new(
            e.kind(),
            format!("could not launch {}: {}", program, e),
        ))
    })
}
