// file: src/extractor/mod.rs
// description: indicator extraction module exports
// reference: internal module structure

pub mod domains;
pub mod hashes;
pub mod ioc;
pub mod patterns;

pub use domains::{DEFAULT_ALLOWLIST, default_allowlist};
pub use ioc::IocExtractor;
