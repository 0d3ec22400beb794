//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Domain types and pure logic
//! - `wire.rs` — Raw serde structs matching provider responses
//! - `convert.rs` — `From` conversions from wire types
//! - `client.rs` — Sub-client with HTTP methods (and caching, where allowed)

pub mod message;
pub mod sending;
