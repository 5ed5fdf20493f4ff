//! Terminal front end for asset audits.
//!
//! The binary wires these pieces to stdin and the command line; they live in
//! the library so tests can drive a session with in-memory input.

pub mod batch;
pub mod feed;
pub mod interactive;
pub mod logging;
pub mod photo;
pub mod repl;
pub mod tables;
