//! Warnsift core library.
//!
//! Converts free-form build tool and compiler output into normalized,
//! prioritized issue collections that reporting can aggregate and filter.
//!
//! High-level modules:
//! - `model`: the immutable [`Issue`](model::Issue) record, its normalizing
//!   [`IssueBuilder`](model::IssueBuilder), and the indexed
//!   [`Issues`](model::Issues) collection.
//! - `parser`: the [`IssueParser`](parser::IssueParser) contract, the
//!   lookahead line stream, and the built-in tool parsers.
//! - `registry`: explicit tool-id to parser-factory registry.
//! - `scan`: concurrent fan-out of (tool, file) parses with a single merge
//!   point.
//! - `discovery`: log file resolution from configured globs.
//! - `config`, `output`, `cli`, `error`: YAML configuration, report writers,
//!   CLI argument parsing (binary uses this), and the error taxonomy.

pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod model;
pub mod output;
pub mod parser;
pub mod registry;
pub mod scan;
