//! Domain layer: the round aggregate, its commands and events, and the
//! discussion speaker rotation.

pub mod aggregates;
pub mod commands;
pub mod events;
pub mod speaker;
