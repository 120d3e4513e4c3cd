//! Impostor Core — shared domain abstractions.
//!
//! This crate defines the traits and types every bounded context depends
//! on: deterministic time and randomness, the domain event envelope, the
//! audio cue seam, and the game error taxonomy. It contains no
//! infrastructure code.

pub mod clock;
pub mod command;
pub mod cue;
pub mod error;
pub mod event;
pub mod rng;
