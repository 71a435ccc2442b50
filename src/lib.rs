// ABOUTME: Library root for launchpad - exposes the image builder and deployment client.
// ABOUTME: The CLI binary is in main.rs.

pub mod api;
pub mod config;
pub mod context;
pub mod engine;
pub mod environment;
pub mod error;
pub mod exec;
pub mod image;
pub mod lifecycle;
pub mod output;
pub mod pipeline;
pub mod types;
