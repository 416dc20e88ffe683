pub mod handlers;
pub mod models;
pub mod requests;
pub mod responses;
pub mod storage;
#[cfg(test)]
mod tests;
