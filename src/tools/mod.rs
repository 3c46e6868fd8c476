//! Tool handlers exposed by the MCP server.
//!
//! Handlers are synchronous functions over a [`FilterEngine`](crate::filter::FilterEngine);
//! the server only serializes access to the shared engine.

pub mod render;
pub mod search;
pub mod tags;
