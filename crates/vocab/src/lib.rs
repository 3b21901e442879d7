//! Vocab - import vocabulary sources from the command line.
//!
//! The binary parses OBO files with [`vocab_obo`] and writes the resulting
//! terms as JSON Lines, or summarizes them.

#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod stats;
