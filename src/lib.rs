pub mod build_mode;
pub mod config;
pub mod content;
pub mod content_list;
pub mod loader;
pub mod logger;
pub mod paginator;
pub mod site_plan;
pub mod tag_filter;
pub mod tag_index;
pub mod text_utils;
pub mod util;
#[cfg(test)]
mod test_data;
