//! Core domain layer for Modsmith.
//!
//! Pure business logic: compatibility tables, version resolution, the mod
//! configuration and entity model, and the generators for every file a mod
//! project contains. Nothing in here touches the filesystem or logs; I/O
//! happens behind the ports defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Immutable entities**: Configurations are built once and never mutated
//! - **Static tables**: Compatibility data is `'static` and never written

pub mod artifacts;
pub mod compatibility;
pub mod entities;
pub mod error;
pub mod resolver;
pub mod value_objects;

mod validation;

pub use entities::{
    BinaryToWrite, DirectoryToCreate, EntityDefinition, FileToCopy, FileToWrite, FsEntry,
    ModConfiguration, ModConfigurationBuilder, ProjectStructure,
};
pub use error::{DomainError, ErrorCategory};
pub use resolver::{DependencyBundle, VersionResolver, first_matching_threshold};
pub use validation::DomainValidator;
pub use value_objects::{EntityKind, JavaRequirement, PlatformVersion};
