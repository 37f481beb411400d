//! 検索ルートのパス正規化
//!
//! 設定ファイルに書かれたパスは `~`、環境変数（`$VAR` / `${VAR}` / `%VAR%`）
//! を含みうる。展開後に `.` と `..` を字句的に畳み込む（ファイルシステムには触れない）。

use regex::{Captures, Regex};
use std::ffi::OsString;
use std::path::{Component, Path, PathBuf};

/// `~` と環境変数を展開して正規化したパスを返す
pub fn normalize_root(raw: &str) -> PathBuf {
    let home = dirs::home_dir();
    let with_home = expand_home(raw, home.as_deref());
    let expanded = expand_env_vars(&with_home, |name| std::env::var(name).ok());
    lexical_normalize(Path::new(&expanded))
}

/// 先頭の `~` をホームディレクトリに置換（`~user` 形式は対象外）
pub fn expand_home(raw: &str, home: Option<&Path>) -> String {
    let Some(home) = home else {
        return raw.to_string();
    };

    if raw == "~" {
        return home.display().to_string();
    }

    match raw.strip_prefix("~/").or_else(|| raw.strip_prefix("~\\")) {
        Some(rest) => home.join(rest).display().to_string(),
        None => raw.to_string(),
    }
}

/// 環境変数を展開。未定義の変数はそのまま残す
pub fn expand_env_vars<F>(raw: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lazy_static::lazy_static! {
        static ref VAR_RE: Regex = Regex::new(
            r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}|\$([A-Za-z_][A-Za-z0-9_]*)|%([A-Za-z_][A-Za-z0-9_()]*)%"
        ).unwrap();
    }

    VAR_RE
        .replace_all(raw, |caps: &Captures| {
            let name = caps
                .get(1)
                .or_else(|| caps.get(2))
                .or_else(|| caps.get(3))
                .map(|m| m.as_str())
                .unwrap_or_default();
            lookup(name).unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// `.` と `..` を字句的に除去
///
/// POSIX では先頭がちょうど `//` の場合（ネットワークパス）はそのまま残す。
/// 3本以上は1本にまとめる。
pub fn lexical_normalize(path: &Path) -> PathBuf {
    let normalized = fold_components(path);

    if cfg!(not(windows)) && has_double_slash_root(path) {
        let mut rooted = OsString::from("/");
        rooted.push(normalized.as_os_str());
        return PathBuf::from(rooted);
    }
    normalized
}

fn has_double_slash_root(path: &Path) -> bool {
    let raw = path.as_os_str().to_string_lossy();
    raw.starts_with("//") && !raw.starts_with("///")
}

fn fold_components(path: &Path) -> PathBuf {
    let mut parts: Vec<Component> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                // ルートより上には行かない
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }

    if parts.is_empty() {
        return PathBuf::from(".");
    }
    parts.iter().map(|c| c.as_os_str()).collect()
}
