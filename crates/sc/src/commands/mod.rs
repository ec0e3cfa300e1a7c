//! CLI command implementations.

pub(crate) mod kinds;
pub(crate) mod render;

pub(crate) use kinds::KindsArgs;
pub(crate) use render::RenderArgs;
