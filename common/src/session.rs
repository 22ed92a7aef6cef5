//! 検索セッション
//!
//! 表示を書き換えてよい検索は常に1つだけ。新しい検索を始めると
//! それより前のチケットは無効になり、遅れて返ってきた結果は捨てられる。
//!
//! ファイル検索のプレビュー参照（ブラウザのobject URLなど）もここで保持する。
//! 次の検索の開始時、またはセッション破棄時にdropされる。

/// 1回の検索を識別するチケット
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTicket(u64);

impl SearchTicket {
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// 単一スロットの検索セッション
///
/// `P` はプレビュー参照。解放処理は `P` の `Drop` に置く。
#[derive(Debug)]
pub struct SearchSession<P> {
    generation: u64,
    preview: Option<P>,
}

impl<P> SearchSession<P> {
    pub fn new() -> Self {
        Self {
            generation: 0,
            preview: None,
        }
    }

    /// 新しい検索を開始する
    ///
    /// 以前のチケットは無効になり、保持していたプレビューは解放される。
    pub fn begin(&mut self) -> SearchTicket {
        self.generation += 1;
        self.preview = None;
        SearchTicket(self.generation)
    }

    /// このチケットがまだ表示を書き換えてよいか
    pub fn is_current(&self, ticket: SearchTicket) -> bool {
        ticket.0 == self.generation
    }

    /// 最新のチケットなら値を通し、古ければ捨てる
    pub fn settle<T>(&self, ticket: SearchTicket, value: T) -> Option<T> {
        self.is_current(ticket).then_some(value)
    }

    /// プレビューを保持する
    ///
    /// チケットが古い場合は保持せずにそのまま返す（呼び出し側でdropされる）。
    pub fn attach_preview(&mut self, ticket: SearchTicket, preview: P) -> Result<&P, P> {
        if !self.is_current(ticket) {
            return Err(preview);
        }
        let stored: &P = self.preview.insert(preview);
        Ok(stored)
    }
}

impl<P> Default for SearchSession<P> {
    fn default() -> Self {
        Self::new()
    }
}
