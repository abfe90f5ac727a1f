// handlers/mod.rs - HTTP handlers
//
// Each endpoint lives in its own sub-module with one file per verb.

pub mod schema; // /api/schema/:name

pub use schema::SchemaEndpoint;
