//! Ballot Finder Common Library
//!
//! 区画コードの正規化・ファイル名照合・検索ルートの正規化。
//! ファイルシステムやプロセスには触れない。

pub mod error;
pub mod matcher;
pub mod path;
pub mod precinct;

pub use error::{Error, Result};
pub use matcher::{has_extension, FileQuery, DEFAULT_EXTENSION};
pub use path::{expand_env_vars, expand_home, lexical_normalize, normalize_root};
pub use precinct::{build_candidates, validate_precinct_split, PrecinctSplit, PRECINCT_FORMAT_HINT};
