//! RenderDock submission - send render jobs from a scene to the farm
//!
//! The library reads a scene through [`scene::SceneSnapshotProvider`], builds a
//! [`job::JobDescription`], and posts it to the intake service. Host bindings
//! call [`workflow::submit_scene`]; the `renderdock-submit` binary drives the
//! same workflow from a JSON scene export.

pub mod config;
pub mod error;
pub mod extract;
pub mod job;
pub mod scene;
pub mod snapshot;
pub mod submit;
pub mod workflow;

pub use error::{Error, Result};
