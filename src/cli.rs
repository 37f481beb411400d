use crate::dispatcher::DispatchAction;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ballot-finder")]
#[command(about = "Ballot Finder & Printer: locate a ballot PDF by precinct split and open or print it", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// config.json のパス（省略時は実行ファイルと同じディレクトリ）
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 投票用紙PDFを探して開く（--print で印刷）
    Find {
        /// 区画コード ####.### / ####_###（省略時は入力を求める）
        precinct: Option<String>,

        /// 言語（config の languages の表示名）
        #[arg(short, long)]
        language: Option<String>,

        /// 投票用紙種別（config の ballot_types の表示名）
        #[arg(short, long)]
        ballot_type: Option<String>,

        /// 開かずに既定の印刷コマンドへ送る
        #[arg(long)]
        print: bool,
    },

    /// 検索ルートと言語ディレクトリを点検
    TestPaths,

    /// ログファイルをファイルブラウザで表示
    OpenLog,

    /// 前回の区画コードを表示
    Last,

    /// 設定を表示
    Config {
        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

/// `find` の動作。既定は開く（印刷は明示指定のときだけ）
pub fn find_action(print: bool) -> DispatchAction {
    if print {
        DispatchAction::Print
    } else {
        DispatchAction::Open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_find(args: &[&str]) -> (Option<String>, bool) {
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Commands::Find { precinct, print, .. } => (precinct, print),
            _ => panic!("expected find"),
        }
    }

    #[test]
    fn test_find_opens_by_default() {
        let (precinct, print) = parse_find(&["ballot-finder", "find", "1704.123"]);
        assert_eq!(precinct.as_deref(), Some("1704.123"));
        assert_eq!(find_action(print), DispatchAction::Open);
    }

    #[test]
    fn test_find_prints_only_when_asked() {
        let (_, print) = parse_find(&["ballot-finder", "find", "1704.123", "--print"]);
        assert_eq!(find_action(print), DispatchAction::Print);
    }

    #[test]
    fn test_open_flag_no_longer_exists() {
        assert!(Cli::try_parse_from(["ballot-finder", "find", "1704.123", "--open"]).is_err());
    }
}
