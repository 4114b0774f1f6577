//! Menu commands. Each one works on the loaded [`Session`](crate::session::Session).

pub mod complete;
pub mod master;
pub mod meeting;
pub mod share;
