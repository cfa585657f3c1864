//! relnotes library
//!
//! This module exports the configuration and note-drafting logic of the
//! relnotes binary for use in integration tests.

pub mod config;
pub mod notes;
