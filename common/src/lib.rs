//! Visual Search Common Library
//!
//! CLIとWeb(WASM)で共有される型とユーティリティ

pub mod types;
pub mod error;
pub mod endpoint;
pub mod request;
pub mod parser;
pub mod view;
pub mod session;
pub mod html;

pub use types::{ResultItem, SearchResponse, Similarity};
pub use error::{Error, Result, FAILURE_ALERT, MISSING_INPUT_ALERT};
pub use endpoint::{Backend, DEFAULT_BACKEND_URL, SEARCH_PATH};
pub use request::{FileLabel, SearchRequest, UploadFile, FILE_FIELD};
pub use parser::{check_response, extract_error_detail, is_success_status, parse_search_response};
pub use view::{
    render, render_results, Outcome, Phase, QueryPreview, ResultCard, ResultsView, ViewState,
    NO_RESULTS_MESSAGE, QUERY_HEADING,
};
pub use session::{SearchSession, SearchTicket};
