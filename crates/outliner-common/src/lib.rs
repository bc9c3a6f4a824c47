//! Common utilities for the outliner.
//!
//! This crate provides shared infrastructure used by all outliner components:
//! - **Warning System** - deduplicated, colored terminal output for non-fatal
//!   problems (parse issues, anchor collisions, clamped nesting)

pub mod warning;
