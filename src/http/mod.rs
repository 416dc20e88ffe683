pub mod cors;
pub mod middleware;
pub mod requests;
pub mod responses;
pub mod router;
