//! HTML出力
//!
//! [`ViewState`] を静的なHTMLに変換する。CLIの `--format html` で使う。

use crate::view::{ResultsView, ViewState, NO_RESULTS_MESSAGE, QUERY_HEADING};
use std::fmt::Write;

const STYLE: &str = "\
body { font-family: sans-serif; margin: 2rem; background: #fafafa; }
#results { display: flex; flex-wrap: wrap; gap: 1rem; }
.card { width: 200px; padding: 0.75rem; border: 1px solid #ddd; border-radius: 8px; background: #fff; }
.card img { width: 100%; height: 160px; object-fit: contain; }
.card h3 { font-size: 1rem; margin: 0.5rem 0 0.25rem; }
.card p { margin: 0.1rem 0; color: #555; }
#queryImage img { max-width: 300px; }
.alert { color: #b00020; }
";

/// HTMLエスケープ
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// クエリ画像と結果部分のHTML
pub fn render_fragment(state: &ViewState) -> String {
    let mut html = String::new();

    html.push_str("<div id=\"queryImage\">");
    if let Some(preview) = &state.query_preview {
        let _ = write!(
            html,
            "<h3>{}</h3><img src=\"{}\" alt=\"query image\">",
            QUERY_HEADING,
            escape_html(&preview.src)
        );
    }
    html.push_str("</div>\n");

    if let Some(alert) = &state.alert {
        let _ = writeln!(html, "<p class=\"alert\">{}</p>", escape_html(alert));
    }

    html.push_str("<div id=\"results\">");
    match &state.results {
        ResultsView::Empty => {}
        ResultsView::NoResults => {
            let _ = write!(html, "<p>{}</p>", NO_RESULTS_MESSAGE);
        }
        ResultsView::Cards(cards) => {
            for card in cards {
                let _ = write!(
                    html,
                    "\n<div class=\"card\"><img src=\"{}\" alt=\"{}\"><h3>{}</h3><p>{}</p><p>Similarity: {}</p></div>",
                    escape_html(&card.image_src),
                    escape_html(&card.name),
                    escape_html(&card.name),
                    escape_html(&card.category),
                    escape_html(&card.similarity),
                );
            }
            html.push('\n');
        }
    }
    html.push_str("</div>\n");

    html
}

/// 単体で開けるHTMLページ
pub fn render_page(state: &ViewState, title: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n<style>\n{STYLE}</style>\n</head>\n<body>\n<h1>{title}</h1>\n{body}</body>\n</html>\n",
        title = escape_html(title),
        body = render_fragment(state),
    )
}
