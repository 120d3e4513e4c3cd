//! VocabImpostor — axum HTTP API server.
//!
//! Thin HTTP shell over the round lifecycle: routes build commands,
//! delegate to the application-layer handlers, and render the resulting
//! round view. The only state the shell owns itself is the discussion
//! session (countdown timer plus speaker rotation), which is created and
//! torn down in reaction to round events.

pub mod error;
pub mod routes;
pub mod state;
