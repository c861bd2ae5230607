pub mod build;
pub mod dispatch;
pub mod list;
pub mod render;
pub mod schema;
