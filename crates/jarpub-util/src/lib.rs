//! Shared utilities for jarpub.
//!
//! This crate provides cross-cutting concerns used by the other jarpub
//! crates: the unified error type, filesystem lookups, hashing of key
//! material, and Cargo-style terminal status lines.

pub mod errors;
pub mod fs;
pub mod hash;
pub mod progress;
