//! 外部コマンドの起動

use std::io;
use std::process::Command;

/// 終了状態（テストで組み立てられるよう `ExitStatus` を写し取る）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandStatus {
    pub success: bool,
    pub code: Option<i32>,
}

impl CommandStatus {
    pub fn ok() -> Self {
        Self { success: true, code: Some(0) }
    }

    pub fn failed(code: i32) -> Self {
        Self { success: false, code: Some(code) }
    }
}

pub trait CommandRunner {
    /// コマンドを実行して終了を待つ。起動できなければ `Err`
    fn run(&self, program: &str, args: &[String]) -> io::Result<CommandStatus>;
}

/// `std::process::Command` による実装
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String]) -> io::Result<CommandStatus> {
        let status = Command::new(program).args(args).status()?;
        Ok(CommandStatus {
            success: status.success(),
            code: status.code(),
        })
    }
}
