//! HTTP server module.
//!
//! Binds the configured address and serves the router over plain HTTP, with
//! graceful shutdown on SIGTERM/SIGINT.

mod server;
mod shutdown;

pub use server::{listen_addr, serve_with_handle, start_server, ServerError};
