//! Integration tests module
//!
//! Library-level tests drive the resolver and installers against a
//! `wiremock` GitHub API; CLI tests run the `relver` binary.

pub mod cli;
pub mod common;
pub mod install;
pub mod resolve;
