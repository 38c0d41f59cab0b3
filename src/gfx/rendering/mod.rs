//! Rendering infrastructure
//!
//! The render engine owns the surface, device and queue; the pipeline
//! manager caches render pipelines and their shader modules.

pub mod pipeline_manager;
pub mod render_engine;

pub use pipeline_manager::{PipelineConfig, PipelineManager};
pub use render_engine::RenderEngine;
