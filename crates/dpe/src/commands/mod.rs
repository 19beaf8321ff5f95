//! CLI command implementations.

pub(crate) mod inject;
pub(crate) mod render;

pub(crate) use inject::InjectArgs;
pub(crate) use render::RenderArgs;
