//! Shared library modules providing error types, package metadata lookup, and telemetry initialization.

pub mod errors;
pub mod metadata;
pub mod telemetry;
