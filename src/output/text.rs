use std::fmt::Write;
use visual_search_common::{ResultsView, ViewState, NO_RESULTS_MESSAGE, QUERY_HEADING};

/// data URLは長いので種類とサイズだけ表示する
fn display_src(src: &str) -> String {
    match src.strip_prefix("data:") {
        Some(rest) => {
            let mime = rest.split(';').next().unwrap_or("unknown");
            let encoded = rest.split(',').nth(1).unwrap_or("");
            let padding = encoded.bytes().rev().take_while(|&b| b == b'=').count();
            let size = (encoded.len() / 4 * 3).saturating_sub(padding);
            format!("(uploaded {}, {} bytes)", mime, size)
        }
        None => src.to_string(),
    }
}

/// 端末向けのカード表示
pub fn render_text(state: &ViewState) -> String {
    let mut out = String::new();

    if let Some(preview) = &state.query_preview {
        let _ = writeln!(out, "{} {}", QUERY_HEADING, display_src(&preview.src));
        out.push('\n');
    }

    match &state.results {
        ResultsView::Empty => {}
        ResultsView::NoResults => {
            let _ = writeln!(out, "{}", NO_RESULTS_MESSAGE);
        }
        ResultsView::Cards(cards) => {
            for (i, card) in cards.iter().enumerate() {
                let _ = writeln!(out, "[{}] {}", i + 1, card.name);
                let _ = writeln!(out, "    {}", card.category);
                let _ = writeln!(out, "    Similarity: {}", card.similarity);
                let _ = writeln!(out, "    {}", card.image_src);
            }
        }
    }

    if let Some(alert) = &state.alert {
        let _ = writeln!(out, "{}", alert);
    }

    out
}
