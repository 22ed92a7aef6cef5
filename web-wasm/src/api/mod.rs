pub mod search;

pub use search::post_search;
