pub mod cli;
pub mod config;
pub mod decode;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod schema;
pub mod server;
