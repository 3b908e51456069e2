//! Core types, traits, and utilities for quill.
//!
//! This crate provides the foundational abstractions used across all quill crates:
//! - [`IOStreams`] for terminal I/O handling
//! - [`Config`](config::Config) trait for configuration management
//! - [`Repo`] and GitHub instance helpers
//! - Quote field parsing, text utilities and table formatting

pub mod config;
pub mod errors;
pub mod fields;
pub mod instance;
pub mod iostreams;
pub mod repo;
pub mod table;
#[cfg(test)]
pub mod test_utils;
pub mod text;

pub use errors::CoreError;
pub use iostreams::IOStreams;
pub use repo::Repo;
