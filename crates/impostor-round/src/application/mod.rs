//! Application layer: command and query handlers over the round aggregate.

pub mod command_handlers;
pub mod query_handlers;
