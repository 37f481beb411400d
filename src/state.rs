//! 前回入力した区画コードの保存
//!
//! `~/.ballotlookup/state.json`。読めない・壊れている場合は空として扱い、
//! 書き込み失敗はログに残すだけでアプリは止めない。

use crate::error::Result;
use ballot_finder_common::PrecinctSplit;
use log::warn;
use serde_json::{Map, Value};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

const LAST_PRECINCT_KEY: &str = "last_precinct";

#[derive(Debug, Clone)]
pub struct StateFile {
    path: PathBuf,
    /// 未知のキーも保持したまま書き戻す
    values: Map<String, Value>,
}

impl StateFile {
    pub fn load(path: &Path) -> Self {
        let values = File::open(path)
            .ok()
            .and_then(|file| serde_json::from_reader::<_, Map<String, Value>>(BufReader::new(file)).ok())
            .unwrap_or_default();

        Self {
            path: path.to_path_buf(),
            values,
        }
    }

    pub fn last_precinct(&self) -> Option<&str> {
        self.values.get(LAST_PRECINCT_KEY).and_then(Value::as_str)
    }

    pub fn set_last_precinct(&mut self, split: &PrecinctSplit) {
        self.values
            .insert(LAST_PRECINCT_KEY.to_string(), Value::String(split.canonical()));
    }

    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let writer = BufWriter::new(File::create(&self.path)?);
        serde_json::to_writer_pretty(writer, &self.values)?;
        Ok(())
    }

    /// 保存し、失敗してもエラーは握りつぶす（警告ログのみ）
    pub fn save_or_warn(&self) -> bool {
        match self.save() {
            Ok(()) => true,
            Err(e) => {
                warn!("Failed to write state {}: {}", self.path.display(), e);
                false
            }
        }
    }
}
