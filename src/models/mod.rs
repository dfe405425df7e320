//! Data models for admin API responses.

pub mod auto_reply;
pub mod ticket;

pub use auto_reply::AutoReply;
pub use ticket::Ticket;
