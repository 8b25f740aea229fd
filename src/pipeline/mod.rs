//! Pipelines.
//!
//! The module provides a light [pipeline::Pipeline] trait that enables easy
//! and flexible pipeline creation, and the [LineTag] tagging pipeline.
pub mod linetag;
#[allow(clippy::module_inception)]
pub mod pipeline;

pub use linetag::LineTag;
pub use pipeline::Pipeline;
