//! Utility functions and helpers.
//!
//! - [`reader`] - File opener with automatic decompression
//! - [`progress`] - Progress bar used while scanning flow logs
//! - [`format`] - Number and duration formatting for console output

pub mod format;
pub mod progress;
pub mod reader;
