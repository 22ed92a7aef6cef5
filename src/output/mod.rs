//! 検索結果の出力（text/json/html）

mod text;

pub use text::render_text;

use crate::cli::OutputFormat;
use crate::controller::Invocation;
use crate::error::Result;
use std::path::Path;
use visual_search_common::html;

const PAGE_TITLE: &str = "Visual Product Matcher";

/// 出力形式に応じて文字列化する
///
/// JSONは受信したレスポンスをそのまま整形する。失敗時は表示状態を出す。
pub fn format_invocation(invocation: &Invocation, format: OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::Text => render_text(&invocation.view),
        OutputFormat::Json => match &invocation.outcome {
            Ok(response) => serde_json::to_string_pretty(response)?,
            Err(_) => serde_json::to_string_pretty(&invocation.view)?,
        },
        OutputFormat::Html => html::render_page(&invocation.view, PAGE_TITLE),
    };
    Ok(rendered)
}

/// 標準出力またはファイルに書き出す
pub fn write_invocation(
    invocation: &Invocation,
    format: OutputFormat,
    output: Option<&Path>,
) -> Result<()> {
    let rendered = format_invocation(invocation, format)?;
    write_rendered(&rendered, format, output)
}

/// 失敗した検索の出力
///
/// アラートは表示済みなのでtextでは何も書かない。json/htmlは失敗時の表示状態を書き出す。
pub fn write_failure(
    invocation: &Invocation,
    format: OutputFormat,
    output: Option<&Path>,
) -> Result<()> {
    if format == OutputFormat::Text {
        return Ok(());
    }
    write_invocation(invocation, format, output)
}

fn write_rendered(rendered: &str, format: OutputFormat, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, rendered)?;
            println!("✔ {}出力: {}", format, path.display());
        }
        None => print!("{}", rendered),
    }

    Ok(())
}
