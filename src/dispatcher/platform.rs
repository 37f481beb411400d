//! OSごとの開く・印刷・表示コマンド

use super::runner::CommandRunner;
use super::{launch, Dispatcher, Platform};
use crate::error::{BallotFinderError, Result};
use log::{info, warn};
use std::path::Path;

fn path_arg(path: &Path) -> String {
    path.display().to_string()
}

/// Windows: 既定のハンドラ（シェルの動詞）経由
pub struct WindowsDispatcher {
    runner: Box<dyn CommandRunner>,
}

impl WindowsDispatcher {
    pub fn new(runner: Box<dyn CommandRunner>) -> Self {
        Self { runner }
    }
}

impl Dispatcher for WindowsDispatcher {
    fn platform(&self) -> Platform {
        Platform::Windows
    }

    fn open(&self, path: &Path) -> Result<()> {
        info!("Opening: {}", path.display());
        run_checked(self.runner.as_ref(), "powershell", &start_process_args(path, None))
    }

    fn print(&self, path: &Path) -> Result<()> {
        info!("Printing: {}", path.display());
        let args = start_process_args(path, Some("Print"));
        let status = launch(self.runner.as_ref(), "powershell", &args)?;
        if !status.success {
            return Err(BallotFinderError::PrintHandlerMissing(path_arg(path)));
        }
        Ok(())
    }

    fn reveal(&self, path: &Path) -> Result<()> {
        info!("Revealing: {}", path.display());
        // explorer は成功時も 1 を返すことがあるので終了コードは見ない
        let args = vec!["/select,".into(), path_arg(path)];
        launch(self.runner.as_ref(), "explorer", &args).map(|_| ())
    }
}

/// `Start-Process` で既定のハンドラに渡す（cmd.exe は経由しない）
///
/// パスは PowerShell のリテラル文字列に埋め込むので `&` や `%` は解釈されない。
/// リテラル中の `'` は `''` で表す。
fn start_process_args(path: &Path, verb: Option<&str>) -> Vec<String> {
    let literal = path_arg(path).replace('\'', "''");
    let mut command = format!("Start-Process -FilePath '{}'", literal);
    if let Some(verb) = verb {
        command.push_str(&format!(" -Verb {}", verb));
    }
    vec!["-NoProfile".into(), "-Command".into(), command]
}

/// macOS: `open` と `lp`
pub struct MacDispatcher {
    runner: Box<dyn CommandRunner>,
}

impl MacDispatcher {
    pub fn new(runner: Box<dyn CommandRunner>) -> Self {
        Self { runner }
    }
}

impl Dispatcher for MacDispatcher {
    fn platform(&self) -> Platform {
        Platform::MacOs
    }

    fn open(&self, path: &Path) -> Result<()> {
        info!("Opening: {}", path.display());
        run_checked(self.runner.as_ref(), "open", &[path_arg(path)])
    }

    fn print(&self, path: &Path) -> Result<()> {
        info!("Printing: {}", path.display());
        run_checked(self.runner.as_ref(), "lp", &[path_arg(path)])
    }

    fn reveal(&self, path: &Path) -> Result<()> {
        info!("Revealing: {}", path.display());
        run_checked(self.runner.as_ref(), "open", &["-R".into(), path_arg(path)])
    }
}

/// Linux ほか: `xdg-open` と `lp`
pub struct UnixDispatcher {
    runner: Box<dyn CommandRunner>,
}

impl UnixDispatcher {
    pub fn new(runner: Box<dyn CommandRunner>) -> Self {
        Self { runner }
    }
}

impl Dispatcher for UnixDispatcher {
    fn platform(&self) -> Platform {
        Platform::Unix
    }

    fn open(&self, path: &Path) -> Result<()> {
        info!("Opening: {}", path.display());
        run_checked(self.runner.as_ref(), "xdg-open", &[path_arg(path)])
    }

    fn print(&self, path: &Path) -> Result<()> {
        info!("Printing: {}", path.display());
        run_checked(self.runner.as_ref(), "lp", &[path_arg(path)])
    }

    fn reveal(&self, path: &Path) -> Result<()> {
        // ファイル選択表示の仕組みがないので親ディレクトリを開く
        let dir = path.parent().unwrap_or(path);
        info!("Revealing: {}", dir.display());
        run_checked(self.runner.as_ref(), "xdg-open", &[path_arg(dir)])
    }
}

// 起動はできたが失敗終了した場合は警告だけ残す
fn run_checked(runner: &dyn CommandRunner, program: &str, args: &[String]) -> Result<()> {
    let status = launch(runner, program, args)?;
    if !status.success {
        warn!("{} exited with {:?}", program, status.code);
    }
    Ok(())
}
