//! Command implementations.
//!
//! - [`tag`] - Classify a flow log against a lookup table and write the count report
//!
//! Shell completion generation lives in `main.rs` since it only needs the
//! `clap` command definition.

pub mod tag;
