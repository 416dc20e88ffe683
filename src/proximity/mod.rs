pub mod consts;
pub mod feed;
pub mod handlers;
pub mod message_types;
pub mod models;
pub mod watch;
