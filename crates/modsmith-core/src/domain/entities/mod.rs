pub mod entity;
pub mod mod_config;
pub mod project_structure;

pub use entity::EntityDefinition;
pub use mod_config::{ModConfiguration, ModConfigurationBuilder};
pub use project_structure::{
    BinaryToWrite, DirectoryToCreate, FileToCopy, FileToWrite, FsEntry, ProjectStructure,
};
