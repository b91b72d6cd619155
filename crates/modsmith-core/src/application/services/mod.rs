//! Application services - orchestrate use cases.

pub mod project_renderer;

pub use project_renderer::ProjectRenderer;
