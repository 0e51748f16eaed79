//! Publish configuration resolver.
//!
//! Turns a [`jarpub_core::properties::ConfigurationSet`] into immutable
//! descriptors consumed by external engines: where to upload artifacts
//! ([`repository`]), whether and how to sign them ([`signing`]), and which
//! JVM and test subset to run ([`testing`], [`toolchain`]). [`resolver`]
//! ties the pieces together and [`report`] renders the outcome.
//!
//! Resolution is synchronous and pure apart from logging and the explicit
//! key-loading step.

pub mod report;
pub mod repository;
pub mod resolver;
pub mod signing;
pub mod testing;
pub mod toolchain;

/// Placeholder shown instead of secret values.
pub const MASK: &str = "********";
