//! Core utilities shared by relver: errors, tag normalization, paths and
//! credential storage.

pub mod core;

pub use core::credentials::CredentialStore;
pub use core::error::{RelverError, RelverResult};
pub use core::error_help::{format_error_with_help, ErrorHelp};
