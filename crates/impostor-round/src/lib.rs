//! VocabImpostor — Round Lifecycle bounded context.
//!
//! Owns the round state machine: phase transitions, role and word
//! assignment, and turn sequencing. Everything else in the game derives
//! its view from the [`domain::aggregates::Round`] aggregate.

pub mod application;
pub mod domain;
