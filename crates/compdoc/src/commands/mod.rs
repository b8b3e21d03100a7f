//! CLI command implementations.

pub(crate) mod build;
mod definition;
pub(crate) mod render;

pub(crate) use build::BuildArgs;
pub(crate) use render::RenderArgs;
