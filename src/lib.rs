//! minihttpd - Minimal CGI Web Server
//!
//! Core library for HTTP framing, static file serving and CGI execution.

pub mod config;
pub mod handler;
pub mod http;
pub mod server;
