//! Renderdock-Common: Shared types, constants, and utilities.
//!
//! This crate provides the pieces shared between the scene extractor and the
//! job submitter:
//!
//! - **Core Types**: Closed enums for render engines, output formats, priority
//!   tiers and the engine-specific modes that drive conditional extraction
//! - **Path Utilities**: Resolution of host-relative (`//`) asset paths
//! - **Error Handling**: Common error types and result aliases
//!
//! # Examples
//!
//! ```
//! use renderdock_common::{OutputFormat, RenderEngine, Result};
//! use renderdock_common::paths::resolve_host_path;
//! use std::path::Path;
//!
//! let engine: RenderEngine = "CYCLES".parse().unwrap();
//! assert!(engine.supports_tiles());
//!
//! let format: OutputFormat = "OPEN_EXR".parse().unwrap();
//! assert_eq!(format.to_string(), "exr");
//!
//! let texture = resolve_host_path("//tex/wood.png", Some(Path::new("/scenes")));
//! assert_eq!(texture.unwrap(), Path::new("/scenes/tex/wood.png"));
//!
//! fn example() -> Result<RenderEngine> {
//!     "BLENDER_EEVEE".parse()
//! }
//! # example().unwrap();
//! ```

pub mod error;
pub mod paths;
pub mod types;

pub use error::{Error, Result};
pub use types::*;
