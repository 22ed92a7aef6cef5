//! visual-search
//!
//! 画像ファイルまたは画像URLをバックエンドの `/api/search` に送り、
//! 類似商品をカードとして表示する。

pub mod cli;
pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod output;
pub mod progress;
pub mod upload;
