//! Command implementations for the quill quote tracker.
//!
//! Each module corresponds to a `quill` top-level command group.

mod body;
mod hints;

pub mod comment;
pub mod config;
pub mod factory;
pub mod quote;
pub mod react;
pub mod record;

#[cfg(test)]
pub mod test_helpers;
