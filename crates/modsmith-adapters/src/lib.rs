//! Infrastructure adapters for Modsmith.
//!
//! This crate implements the ports defined in
//! `modsmith-core::application::ports` and reads mod scripts from disk. It
//! contains all of the project's I/O.

pub mod filesystem;
pub mod script;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use script::{ModScript, ModScriptLoader};
