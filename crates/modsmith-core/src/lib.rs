//! Modsmith Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Modsmith
//! Fabric mod scaffolder, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          modsmith-cli (CLI)             │
//! │   (loads mod scripts, maps exit codes)  │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │            (ProjectRenderer)            │
//! │     plans artifacts, writes in order    │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │              (Filesystem)               │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    modsmith-adapters (Infrastructure)   │
//! │   (LocalFilesystem, MemoryFilesystem)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (ModConfiguration, VersionResolver,    │
//! │   artifacts, compatibility tables)      │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use modsmith_core::{
//!     application::{ProjectRenderer, ports::Filesystem},
//!     domain::{EntityDefinition, ModConfiguration},
//!     error::ModsmithResult,
//! };
//!
//! # fn demo(filesystem: Box<dyn Filesystem>) -> ModsmithResult<()> {
//! // 1. Build the configuration (fails fast on unsupported versions)
//! let config = ModConfiguration::builder("Example Mod", "examplemod")
//!     .platform_version("1.21.4")
//!     .build()?;
//!
//! let items = vec![EntityDefinition::item("my_item", "My Item", "example.png", "misc")];
//!
//! // 2. Render through an injected filesystem adapter
//! let renderer = ProjectRenderer::new(filesystem);
//! renderer.render(&config, &[], &items, "./build_mod")?;
//! # Ok(())
//! # }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{ProjectRenderer, ports::Filesystem};
    pub use crate::domain::{
        DependencyBundle, EntityDefinition, EntityKind, JavaRequirement, ModConfiguration,
        ModConfigurationBuilder, PlatformVersion, ProjectStructure, VersionResolver,
    };
    pub use crate::error::{ModsmithError, ModsmithResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
