//! 投票用紙ファイルの探索
//!
//! `root/<言語ディレクトリ>` 以下を再帰的に走査し、条件に一致する
//! ファイルをすべて返す。順序は走査順（ソートしない）。

mod summary;

pub use summary::{summarize_root, RootSummary};

use ballot_finder_common::FileQuery;
use log::{debug, info};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 検索ルート1段分（primary / backup）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTier {
    pub name: String,
    pub root: PathBuf,
}

impl SearchTier {
    pub fn new(name: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            root: root.into(),
        }
    }
}

/// 最初に一致が見つかったティアと、その一致一覧
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierHit {
    pub tier: String,
    pub matches: Vec<PathBuf>,
}

/// 1つのルートを検索
///
/// 言語ディレクトリが存在しない場合はエラーではなく空を返す。
pub fn search(root: &Path, language_dir: &str, query: &FileQuery) -> Vec<PathBuf> {
    let lang_path = root.join(language_dir);
    if !lang_path.is_dir() {
        debug!("Language folder not present: {}", lang_path.display());
        return Vec::new();
    }

    let mut hits = Vec::new();

    for entry in WalkDir::new(&lang_path).into_iter() {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                debug!("Skipping unreadable entry: {}", e);
                continue;
            }
        };

        // シンボリックリンク先がディレクトリの場合も除外（辿りはしない）
        if entry.file_type().is_dir() || entry.path().is_dir() {
            continue;
        }

        let is_hit = query.matches(&entry.file_name().to_string_lossy());
        if is_hit {
            hits.push(entry.into_path());
        }
    }

    hits
}

/// ティアを優先順に検索し、最初に一致があったティアの結果だけを返す
///
/// 複数ティアの結果を合算することはない。
pub fn search_tiers(tiers: &[SearchTier], language_dir: &str, query: &FileQuery) -> Option<TierHit> {
    let mut tiers_iter = tiers.iter().peekable();

    while let Some(tier) = tiers_iter.next() {
        let matches = search(&tier.root, language_dir, query);
        if !matches.is_empty() {
            return Some(TierHit {
                tier: tier.name.clone(),
                matches,
            });
        }

        match tiers_iter.peek() {
            Some(next) => info!("Not found in {}. Trying {}...", tier.name, next.name),
            None => info!("Not found in {}.", tier.name),
        }
    }

    None
}
