//! Request dispatch: the routing decision and its two targets, static file
//! serving and CGI execution.

pub mod cgi;
pub mod router;
pub mod static_files;

pub use router::{RouteDecision, route};
