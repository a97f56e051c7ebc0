//! Relnote - Generate a grouped changelog between two tags and publish it
//! as a release
//!
//! Relnote walks the commit history between two tags, maps each commit to
//! its merged change-request, and renders the unique requests into a
//! grouped, templated changelog published as a release on the newer tag.
//!
//! # Architecture
//!
//! The codebase follows a strict layered architecture:
//!
//! - [`cli`] - Command-line interface layer (parses args, delegates to the pipeline)
//! - [`changelog`] - The six-stage generation pipeline (walk, resolve, dedupe, classify, sort, render)
//! - [`core`] - Domain types and configuration
//! - [`forge`] - Abstraction for remote forges (GitHub v1)
//! - [`ui`] - Output utilities
//!
//! # Correctness Invariants
//!
//! Relnote maintains the following invariants:
//!
//! 1. The history between the two tags is linear; a merge commit fails the run
//! 2. Each change-request appears exactly once in the rendered output
//! 3. A failed lookup fails the whole run; a partial changelog is never published
//! 4. Association lookups are bounded to a fixed batch size at any instant

pub mod changelog;
pub mod cli;
pub mod core;
pub mod forge;
pub mod ui;
