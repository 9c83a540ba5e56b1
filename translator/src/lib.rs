//! # Seedbridge Translator
//!
//! Translates a host application's scene into a renderer project.
//!
//! The host is read through the traits of [`host`]; [`build_project`]
//! turns the collected scene into a [`seedbridge_core::project::Project`]
//! together with [`Diagnostics`] for whatever had to be left out.
//!
//! ## Modules
//!
//! - [`host`] - Host scene interfaces and an in-memory implementation
//! - [`builder`] - The translation pipeline
//! - [`settings`] - Renderer settings, loadable from TOML
//! - [`output`] - Saving the built project
//! - [`disney`] - Renderer side of the Disney material plugin
//! - [`expr`] / [`texture`] - Literal or texture-bound parameter values
//!
//! ## Example
//!
//! ```
//! use seedbridge_translator::host::memory::{MemoryGeometry, MemoryNode, MemoryObject};
//! use seedbridge_translator::host::{OutputSize, SceneEntities, SceneNode, TriMesh};
//! use seedbridge_translator::{BuildRequest, build_project};
//!
//! let node = MemoryNode::new("Box001", MemoryObject::geometry(1, MemoryGeometry::Tri(TriMesh::new())));
//! let roots: Vec<&dyn SceneNode> = vec![&node];
//! let request = BuildRequest::new(SceneEntities::collect(&roots, 0), OutputSize::new(640, 480));
//! let built = build_project(&request).unwrap();
//! assert!(built.diagnostics.is_empty());
//! ```

pub mod builder;
pub mod diagnostics;
pub mod disney;
pub mod error;
pub mod expr;
pub mod host;
pub mod output;
pub mod settings;
pub mod texture;

pub use builder::{BuildRequest, BuiltProject, RenderType, build_project};
pub use diagnostics::{Diagnostic, Diagnostics};
pub use disney::{DisneyMaterial, DisneyParam};
pub use error::{BuildError, BuildResult};
pub use output::handle_output;
pub use settings::{OutputMode, OutputSettings, RendererSettings};
pub use texture::TextureMap;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
