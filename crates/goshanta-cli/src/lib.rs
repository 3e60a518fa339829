//! goshanta-cli
//! ============
//!
//! Command-line interface for the `goshanta-core` travel search engine.
//!
//! This crate primarily provides a binary (`goshanta-cli`). The library
//! target only exists so docs.rs renders this overview.
//!
//! Basic usage:
//!
//! ```text
//! goshanta-cli --help
//! goshanta-cli stats
//! goshanta-cli search cheap lake trip for family
//! goshanta-cli --json search I want to visit Sylhet
//! goshanta-cli explain cheap historical museum trip
//! goshanta-cli divisions Bangladesh
//! goshanta-cli districts Sylhet
//! goshanta-cli spots Moulvibazar
//! ```
//!
//! Use `--input <path>` for a custom dataset and `--vocabulary <path>` for
//! custom stop words and keyword tables. For programmatic access use the
//! `goshanta-core` crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]
