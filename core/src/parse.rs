//! # Command Output Parsers
//!
//! Fixed-grammar parsers for the IOS-style `show` commands the discovery
//! sequence issues. Each submodule turns one command's raw text into the
//! row structs in [`crate::rows`]; lines that do not match the grammar
//! are skipped rather than treated as errors, since devices pad their
//! output with banners and blank lines.

pub mod interfaces;
pub mod ospf;
pub mod routes;
