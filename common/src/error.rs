//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// 区画コードの書式不正（メッセージは利用者向けの書式ヒント）
    #[error("{hint}")]
    InvalidPrecinct { input: String, hint: String },
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_is_hint() {
        let error = Error::InvalidPrecinct {
            input: "170.123".to_string(),
            hint: "Use format ####.### (e.g., 1774.234)".to_string(),
        };
        assert_eq!(format!("{}", error), "Use format ####.### (e.g., 1774.234)");
    }

    #[test]
    fn test_error_debug_keeps_input() {
        let error = Error::InvalidPrecinct {
            input: "abcd".to_string(),
            hint: "hint".to_string(),
        };
        let debug = format!("{:?}", error);
        assert!(debug.contains("InvalidPrecinct"));
        assert!(debug.contains("abcd"));
    }
}
