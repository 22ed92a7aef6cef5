pub mod header;
pub mod search_form;
pub mod loading;
pub mod query_image;
pub mod results;
