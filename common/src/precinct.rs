//! 区画コード（Precinct Split）の検証と正規化
//!
//! 入力は `####.###` または `####_###`。正規形は常にドット区切り。

use crate::error::{Error, Result};
use regex::Regex;
use std::fmt;
use std::str::FromStr;

/// 書式不正時に利用者へ返すヒント
pub const PRECINCT_FORMAT_HINT: &str = "Use format ####.### (e.g., 1774.234)";

/// 検証済みの区画コード（ドット区切りの正規形）
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PrecinctSplit {
    district: String,
    split: String,
}

impl PrecinctSplit {
    /// 正規形 `####.###`
    pub fn canonical(&self) -> String {
        format!("{}.{}", self.district, self.split)
    }

    /// ファイル名に含まれうる部分文字列（ドット形式, アンダースコア形式）
    pub fn candidates(&self) -> [String; 2] {
        [
            format!("{}.{}", self.district, self.split),
            format!("{}_{}", self.district, self.split),
        ]
    }
}

impl fmt::Display for PrecinctSplit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.district, self.split)
    }
}

impl FromStr for PrecinctSplit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        validate_precinct_split(s)
    }
}

/// 入力文字列を検証し、正規形に変換
///
/// 前後の空白は除去する。部分一致は不可（文字列全体が書式に一致すること）。
///
/// # Examples
/// ```
/// use ballot_finder_common::validate_precinct_split;
///
/// let split = validate_precinct_split(" 1704_123 ").unwrap();
/// assert_eq!(split.canonical(), "1704.123");
/// assert!(validate_precinct_split("170.123").is_err());
/// ```
pub fn validate_precinct_split(input: &str) -> Result<PrecinctSplit> {
    lazy_static::lazy_static! {
        // \d はUnicode数字も含むためASCIIに限定
        static ref PRECINCT_RE: Regex = Regex::new(r"^([0-9]{4})[._]([0-9]{3})$").unwrap();
    }

    let trimmed = input.trim();
    match PRECINCT_RE.captures(trimmed) {
        Some(caps) => Ok(PrecinctSplit {
            district: caps[1].to_string(),
            split: caps[2].to_string(),
        }),
        None => Err(Error::InvalidPrecinct {
            input: input.to_string(),
            hint: PRECINCT_FORMAT_HINT.to_string(),
        }),
    }
}

/// 正規形の文字列から候補部分文字列を生成
///
/// 正規形でない（ドットを含まない）場合は入力をそのまま2件返す。
pub fn build_candidates(canonical: &str) -> [String; 2] {
    match canonical.split_once('.') {
        Some((district, split)) => [
            format!("{}.{}", district, split),
            format!("{}_{}", district, split),
        ],
        None => [canonical.to_string(), canonical.to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_happy_paths() {
        assert_eq!(validate_precinct_split("1704.123").unwrap().canonical(), "1704.123");
        assert_eq!(validate_precinct_split("1704_123").unwrap().canonical(), "1704.123");
        assert_eq!(validate_precinct_split("  0001.000\t").unwrap().canonical(), "0001.000");
    }

    #[test]
    fn test_validate_rejects_bad() {
        for bad in [
            "170.123", "17044.123", "1704.12", "1704.1234", "1704-123",
            "abcd.efg", "", "  ", "1704.123x", "x1704.123", "1704..123",
            "١٢٣٤.٥٦٧",
        ] {
            let err = validate_precinct_split(bad).unwrap_err();
            assert!(err.to_string().contains("format"), "{:?}", bad);
        }
    }

    #[test]
    fn test_error_carries_original_input() {
        match validate_precinct_split(" 12.3 ") {
            Err(Error::InvalidPrecinct { input, hint }) => {
                assert_eq!(input, " 12.3 ");
                assert_eq!(hint, PRECINCT_FORMAT_HINT);
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_candidates_dot_and_underscore() {
        assert_eq!(build_candidates("6432.732"), ["6432.732", "6432_732"]);

        let split: PrecinctSplit = "6432_732".parse().unwrap();
        assert_eq!(split.candidates(), ["6432.732".to_string(), "6432_732".to_string()]);
    }

    #[test]
    fn test_display_is_canonical() {
        let split = validate_precinct_split("1774_234").unwrap();
        assert_eq!(split.to_string(), "1774.234");
    }
}
