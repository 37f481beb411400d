//! 検索ルートの点検（パス確認）

use ballot_finder_common::has_extension;
use std::fmt;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootSummary {
    pub root: PathBuf,
    pub exists: bool,
    /// 存在する言語ディレクトリ配下の文書数
    pub documents: usize,
    pub missing_languages: Vec<String>,
}

/// ルートの存在・文書数・欠けている言語ディレクトリを調べる
pub fn summarize_root<'a, I>(root: &Path, language_dirs: I, extension: &str) -> RootSummary
where
    I: IntoIterator<Item = &'a str>,
{
    let mut summary = RootSummary {
        root: root.to_path_buf(),
        exists: root.is_dir(),
        documents: 0,
        missing_languages: Vec::new(),
    };

    if !summary.exists {
        return summary;
    }

    for lang in language_dirs {
        let lang_path = root.join(lang);
        if !lang_path.is_dir() {
            summary.missing_languages.push(lang.to_string());
            continue;
        }

        summary.documents += WalkDir::new(&lang_path)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| !e.file_type().is_dir())
            .filter(|e| has_extension(&e.file_name().to_string_lossy(), extension))
            .count();
    }

    summary
}

impl fmt::Display for RootSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.exists {
            return write!(f, "✗ {} (missing)", self.root.display());
        }

        write!(f, "✓ {} (PDFs found: {})", self.root.display(), self.documents)?;
        if !self.missing_languages.is_empty() {
            write!(f, "; missing language dirs: {}", self.missing_languages.join(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_missing_root() {
        let summary = summarize_root(Path::new("/nonexistent/ballots"), ["English"], ".pdf");
        assert!(!summary.exists);
        assert_eq!(summary.to_string(), "✗ /nonexistent/ballots (missing)");
    }

    #[test]
    fn test_counts_documents_and_missing_languages() {
        let dir = tempdir().unwrap();
        let english = dir.path().join("English").join("U18");
        fs::create_dir_all(&english).unwrap();
        fs::write(english.join("1704.123_U18.pdf"), b"").unwrap();
        fs::write(english.join("1704.124_U18.PDF"), b"").unwrap();
        fs::write(english.join("notes.txt"), b"").unwrap();

        let summary = summarize_root(dir.path(), ["English", "Español"], ".pdf");
        assert!(summary.exists);
        assert_eq!(summary.documents, 2);
        assert_eq!(summary.missing_languages, vec!["Español".to_string()]);
        assert!(summary.to_string().ends_with("(PDFs found: 2); missing language dirs: Español"));
    }
}
