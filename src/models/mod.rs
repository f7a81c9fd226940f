//! Typed records shared by the store and the HTTP layer.

pub mod log;
pub mod response;
