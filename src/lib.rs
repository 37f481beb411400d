//! Ballot Finder
//!
//! 区画コード・言語・投票用紙種別から投票用紙PDFを探し、開く／印刷する。

pub mod cli;
pub mod config;
pub mod context;
pub mod dispatcher;
pub mod error;
pub mod finder;
pub mod locator;
pub mod logging;
pub mod selector;
pub mod state;
