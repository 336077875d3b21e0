//! Core library for gvmap.
//!
//! Turns a list of raw `[prefix/]group/version` specs into the set of input
//! directories for code generation, plus the group/version metadata that
//! goes with them:
//!
//! ```
//! use gvmap_core::{Resolver, ResolverConfig};
//!
//! let resolver = Resolver::new(ResolverConfig::new("k8s.io/kubernetes/pkg/apis"));
//! let resolution = resolver.resolve(&["api/", "apps/v1beta1"]).unwrap();
//!
//! assert_eq!(resolution.paths[0].to_str(), Some("k8s.io/kubernetes/pkg/api"));
//! assert_eq!(resolution.paths[1].to_str(), Some("k8s.io/kubernetes/pkg/apis/apps/v1beta1"));
//! ```

pub mod config;
pub mod error;
pub mod paths;
pub mod resolver;
pub mod spec;

pub use config::{Config, GeneratorConfig};
pub use error::{ConfigError, ResolveError};
pub use paths::{clean_path, resolve_path};
pub use resolver::{PathEntry, Resolution, Resolver, ResolverConfig, resolve};
pub use spec::{PathSpec, parse_spec};

pub use gvmap_schema as schema;
