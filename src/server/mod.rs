//! Transport layer: socket setup and the accept loop.

pub mod listener;
