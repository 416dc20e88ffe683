pub mod consts;
pub mod decoder;
pub mod distance;
pub mod handlers;
pub mod models;
pub mod requests;
pub mod responses;
#[cfg(test)]
mod tests;
