//! HTTP protocol implementation.
//!
//! This module implements the wire-facing half of the server: line-oriented
//! framing over a raw byte stream, request-line parsing, canned responses,
//! and the per-connection pipeline.
//!
//! # Pipeline
//!
//! Each accepted connection runs one pass through:
//!
//! ```text
//! LineReader ──▶ parse_request_line ──▶ route ──▶ serve_static
//!                                             └─▶ execute_cgi
//! ```
//!
//! then the connection is shut down. There is no keep-alive: the end of the
//! response body is signalled by closing the stream, so no `Content-Length`
//! response header is ever emitted.
//!
//! # Submodules
//!
//! - **`line_reader`**: byte-at-a-time reader normalizing CR / LF / CRLF
//! - **`request`**: request-line parsing and path resolution
//! - **`response`**: status codes and canned response bodies
//! - **`writer`**: serializes header blocks onto the stream
//! - **`connection`**: the per-connection request pipeline

pub mod connection;
pub mod line_reader;
pub mod request;
pub mod response;
pub mod writer;
