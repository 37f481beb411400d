//! ファイル名照合
//!
//! 1ファイル名に対するヒット判定。判定条件はすべてAND:
//! 1. 拡張子が一致
//! 2. 候補部分文字列のいずれか（OR）を含む
//! 3. 投票用紙種別の部分文字列を含む

use crate::precinct::PrecinctSplit;

/// 既定の文書拡張子
pub const DEFAULT_EXTENSION: &str = ".pdf";

/// 1回の検索条件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileQuery {
    needles: Vec<String>,
    ballot_type: String,
    extension: String,
    case_insensitive: bool,
}

impl FileQuery {
    pub fn new(needles: Vec<String>, ballot_type: impl Into<String>, case_insensitive: bool) -> Self {
        let query = Self {
            needles,
            ballot_type: ballot_type.into(),
            extension: DEFAULT_EXTENSION.to_string(),
            case_insensitive,
        };
        query.folded()
    }

    /// 区画コードの候補2件から検索条件を作成
    pub fn for_precinct(split: &PrecinctSplit, ballot_type: impl Into<String>, case_insensitive: bool) -> Self {
        Self::new(split.candidates().to_vec(), ballot_type, case_insensitive)
    }

    /// 拡張子を差し替え（先頭の`.`は省略可）
    pub fn with_extension(mut self, extension: &str) -> Self {
        self.extension = normalize_extension(extension);
        self.folded()
    }

    pub fn needles(&self) -> &[String] {
        &self.needles
    }

    pub fn ballot_type(&self) -> &str {
        &self.ballot_type
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    /// ファイル名がヒットするか
    pub fn matches(&self, file_name: &str) -> bool {
        if self.case_insensitive {
            let lowered = file_name.to_lowercase();
            self.matches_folded(&lowered)
        } else {
            self.matches_folded(file_name)
        }
    }

    fn matches_folded(&self, name: &str) -> bool {
        name.ends_with(&self.extension)
            && self.needles.iter().any(|n| name.contains(n.as_str()))
            && name.contains(self.ballot_type.as_str())
    }

    // 大文字小文字を区別しない場合は条件側を先に小文字化しておく
    fn folded(mut self) -> Self {
        if self.case_insensitive {
            self.needles = self.needles.iter().map(|n| n.to_lowercase()).collect();
            self.ballot_type = self.ballot_type.to_lowercase();
            self.extension = self.extension.to_lowercase();
        }
        self
    }
}

/// 拡張子が文書種別に一致するか（`.pdf` / `pdf` どちらの指定も可）
pub fn has_extension(file_name: &str, extension: &str) -> bool {
    file_name
        .to_lowercase()
        .ends_with(&normalize_extension(extension).to_lowercase())
}

fn normalize_extension(extension: &str) -> String {
    let trimmed = extension.trim();
    if trimmed.starts_with('.') {
        trimmed.to_string()
    } else {
        format!(".{}", trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::precinct::validate_precinct_split;

    fn query(ballot: &str, ci: bool) -> FileQuery {
        let split = validate_precinct_split("1704.123").unwrap();
        FileQuery::for_precinct(&split, ballot, ci)
    }

    #[test]
    fn test_matches_either_separator() {
        let q = query("STND", true);
        assert!(q.matches("1704.123_STND.pdf"));
        assert!(q.matches("1704_123_STND.pdf"));
        assert!(!q.matches("1704-123_STND.pdf"));
    }

    #[test]
    fn test_requires_ballot_type() {
        let q = query("STND", true);
        assert!(!q.matches("1704.123_U18.pdf"));
    }

    #[test]
    fn test_requires_extension() {
        let q = query("STND", true);
        assert!(!q.matches("1704.123_STND.pdf.bak"));
        assert!(!q.matches("1704.123_STND.txt"));
    }

    #[test]
    fn test_case_insensitive_folds_everything() {
        let split = validate_precinct_split("6432.732").unwrap();
        let q = FileQuery::for_precinct(&split, "PND18", true);
        assert!(q.matches("6432.732_pNd18.PDF"));
        assert_eq!(q.ballot_type(), "pnd18");
    }

    #[test]
    fn test_case_sensitive_is_literal() {
        let q = query("STND", false);
        assert!(q.matches("1704.123_STND.pdf"));
        assert!(!q.matches("1704.123_stnd.pdf"));
        assert!(!q.matches("1704.123_STND.PDF"));
    }

    #[test]
    fn test_plain_substring_containment() {
        // 語境界は見ない
        let q = query("PND", true);
        assert!(q.matches("1704.123_PND18.pdf"));
    }

    #[test]
    fn test_with_extension() {
        let q = query("STND", true).with_extension("TXT");
        assert_eq!(q.extension(), ".txt");
        assert!(q.matches("1704.123_STND.Txt"));
        assert!(!q.matches("1704.123_STND.pdf"));
    }

    #[test]
    fn test_has_extension() {
        assert!(has_extension("a.PDF", ".pdf"));
        assert!(has_extension("a.pdf", "pdf"));
        assert!(!has_extension("a.pdfx", ".pdf"));
    }
}
