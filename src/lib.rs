pub mod config;
pub mod post_list;
pub mod post;
mod test_data;
pub mod post_store;
pub mod paginator;
pub mod visibility;
pub mod og_image;
pub mod site_builder;
pub mod slug;
pub mod logger;
pub mod util;
