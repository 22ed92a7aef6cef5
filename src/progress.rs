//! 端末のローディング表示

use crate::controller::ViewSink;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use visual_search_common::ViewState;

/// 読み込み中はスピナーを出し、終わったら消す。失敗時はアラートを標準エラーに出す。
#[derive(Default)]
pub struct SpinnerSink {
    spinner: Option<ProgressBar>,
    quiet: bool,
}

impl SpinnerSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// スピナーを出さない（アラートは出す）
    pub fn quiet() -> Self {
        Self {
            spinner: None,
            quiet: true,
        }
    }

    fn show(&mut self) {
        if self.quiet || self.spinner.is_some() {
            return;
        }
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message("検索中...");
        spinner.enable_steady_tick(Duration::from_millis(100));
        self.spinner = Some(spinner);
    }

    fn hide(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }
}

impl ViewSink for SpinnerSink {
    fn paint(&mut self, state: &ViewState) {
        if state.is_loading() {
            self.show();
            return;
        }

        self.hide();
        if let Some(alert) = &state.alert {
            eprintln!("⚠ {}", alert);
        }
    }
}

impl Drop for SpinnerSink {
    fn drop(&mut self) {
        self.hide();
    }
}
