//! GitHub issues REST client backing quill: HTTP setup, transport, wire
//! models and the quote/record tracker.

pub mod client;
pub mod errors;
pub mod http;
pub mod models;
pub mod tracker;

pub use client::Client;
pub use errors::ApiError;
pub use tracker::IssueTracker;
