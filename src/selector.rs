//! 対話式の選択・入力（dialoguer）

use crate::error::{BallotFinderError, Result};
use crate::finder::Chooser;
use dialoguer::{Input, Select};
use std::path::PathBuf;

/// 複数一致から1件を選ぶ。Esc / q でキャンセル
pub struct PromptChooser;

impl Chooser for PromptChooser {
    fn choose(&self, paths: &[PathBuf]) -> Result<Option<usize>> {
        let items: Vec<String> = paths.iter().map(|p| p.display().to_string()).collect();

        Select::new()
            .with_prompt("Choose a file (Esc to cancel)")
            .items(&items)
            .default(0)
            .interact_opt()
            .map_err(|e| BallotFinderError::Prompt(e.to_string()))
    }
}

/// 表示名の一覧から1つ選ぶ。1件しかなければ聞かずに返す
pub fn select_name<'a, I>(prompt: &str, names: I) -> Result<String>
where
    I: IntoIterator<Item = &'a String>,
{
    let names: Vec<&String> = names.into_iter().collect();

    match names.as_slice() {
        [] => Err(BallotFinderError::Config(format!("nothing configured for {}", prompt))),
        [only] => Ok((*only).clone()),
        _ => {
            let idx = Select::new()
                .with_prompt(prompt)
                .items(&names)
                .default(0)
                .interact()
                .map_err(|e| BallotFinderError::Prompt(e.to_string()))?;
            Ok(names[idx].clone())
        }
    }
}

/// 区画コードを入力させる（前回値があれば既定値にする）
pub fn prompt_precinct(last: Option<&str>) -> Result<String> {
    let mut input = Input::<String>::new().with_prompt("Precinct Split (####.###)");
    if let Some(last) = last {
        input = input.default(last.to_string());
    }

    input
        .interact_text()
        .map_err(|e| BallotFinderError::Prompt(e.to_string()))
}
