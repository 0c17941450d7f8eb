//! HTTP API: server, routing, and request/response mapping for the user store.

pub mod app;
pub mod config;
pub mod server;
