//! 検索から開く／印刷までの一連の流れ
//!
//! 1. 区画コードを検証（不正なら何も変更せずに終了）
//! 2. 前回値として保存
//! 3. ティアを順に検索
//! 4. 複数一致なら利用者に選ばせる（キャンセル可）
//! 5. 開く／印刷

use crate::context::AppContext;
use crate::dispatcher::{act, DispatchAction, Dispatcher};
use crate::error::Result;
use crate::locator::search_tiers;
use ballot_finder_common::{validate_precinct_split, FileQuery};
use log::{debug, error, info, warn};
use std::path::PathBuf;

/// 1回の検索要求（言語・種別は表示名）
#[derive(Debug, Clone)]
pub struct FindRequest {
    pub precinct_input: String,
    pub language: String,
    pub ballot_type: String,
    pub action: DispatchAction,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FindOutcome {
    /// 区画コードの書式不正（書式ヒント付き）
    InvalidPrecinct(String),
    NotFound {
        precinct: String,
        ballot_type: String,
        language: String,
    },
    /// 複数一致から選ばずに終了
    Cancelled,
    Dispatched {
        path: PathBuf,
        tier: String,
        action: DispatchAction,
    },
}

/// 複数一致時の選択
pub trait Chooser {
    /// 選ばれた要素の添字。キャンセルなら `None`
    fn choose(&self, paths: &[PathBuf]) -> Result<Option<usize>>;
}

pub fn find_ballot(
    ctx: &AppContext,
    request: &FindRequest,
    chooser: &dyn Chooser,
    dispatcher: &dyn Dispatcher,
) -> Result<FindOutcome> {
    let split = match validate_precinct_split(&request.precinct_input) {
        Ok(split) => split,
        Err(e) => {
            error!("Error: {}", e);
            return Ok(FindOutcome::InvalidPrecinct(e.to_string()));
        }
    };

    let mut state = ctx.load_state();
    state.set_last_precinct(&split);
    state.save_or_warn();

    let config = &ctx.config;
    let ballot = config.ballot_code(&request.ballot_type)?;
    let lang_dir = config.language_dir(&request.language)?;
    let query = FileQuery::for_precinct(&split, ballot, config.case_insensitive)
        .with_extension(&config.document_extension);

    info!("Searching for {} [{}] in '{}' ...", split, ballot, lang_dir);
    debug!(
        "Needles {:?}, extension {}, case-insensitive {}",
        query.needles(),
        query.extension(),
        query.case_insensitive()
    );

    let Some(hit) = search_tiers(&ctx.tiers(), lang_dir, &query) else {
        info!("No matching PDF found.");
        return Ok(FindOutcome::NotFound {
            precinct: split.canonical(),
            ballot_type: ballot.to_string(),
            language: lang_dir.to_string(),
        });
    };

    let target = if hit.matches.len() > 1 {
        info!("Multiple matches ({}) in {} path.", hit.matches.len(), hit.tier);
        let chosen = chooser
            .choose(&hit.matches)?
            .and_then(|idx| hit.matches.get(idx).cloned());
        match chosen {
            Some(path) => path,
            None => {
                info!("User cancelled.");
                return Ok(FindOutcome::Cancelled);
            }
        }
    } else {
        hit.matches[0].clone()
    };

    info!("Found: {}", target.display());
    if let Err(e) = act(dispatcher, &target, request.action) {
        warn!("{}", e);
        return Err(e);
    }
    info!(
        "{}",
        match request.action {
            DispatchAction::Open => "Opened.",
            DispatchAction::Print => "Sent to printer / print command issued.",
        }
    );

    Ok(FindOutcome::Dispatched {
        path: target,
        tier: hit.tier,
        action: request.action,
    })
}
