pub mod create_post;
pub mod delete_post;
pub mod get_post;
pub mod list_posts;
