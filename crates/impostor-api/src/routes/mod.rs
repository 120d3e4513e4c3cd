//! Route modules organized by concern.

pub mod categories;
pub mod discussion;
pub mod health;
pub mod round;
