//! Configuration module
//!
//! Resolves where the stores and the audit log live on each platform.

pub mod paths;

pub use paths::ShoeboxPaths;
