//! Directive resolution for GraphQL schema generation.
//!
//! Program elements carry annotations. An annotation whose type is marked with a
//! [`DirectiveMarker`] stands for a schema directive: [`DirectiveResolver`] builds the
//! directive definition once per name, caches it in the [`DirectiveRegistry`], and returns one
//! [`Directive`] per occurrence with that occurrence's argument values.
//!
//! ```
//! use graphql_schema_directives::{
//!     Annotation, AnnotationType, DirectiveLocations, DirectiveMarker, DirectiveResolver, FieldMetadata,
//!     PropertyDescriptor, PropertyType, SchemaGeneratorConfig,
//! };
//! use std::sync::Arc;
//!
//! let rate_limit = Arc::new(
//!     AnnotationType::new("RateLimit")
//!         .with_meta_annotation(DirectiveMarker::new().locations(DirectiveLocations::FIELD_DEFINITION))
//!         .with_property(PropertyDescriptor::new("threshold", PropertyType::Int).with_default(5)),
//! );
//!
//! let field = FieldMetadata::new("posts").with_annotation(Annotation::new(rate_limit).with_value("threshold", 10));
//!
//! let resolver = DirectiveResolver::new(&SchemaGeneratorConfig::default());
//! let directives = resolver.field_directives(&field).unwrap();
//!
//! assert_eq!(directives[0].to_string(), "@rateLimit(threshold: 10)");
//! assert_eq!(
//!     resolver.registry().render_sdl(),
//!     "directive @rateLimit(threshold: Int! = 5) on FIELD_DEFINITION\n"
//! );
//! ```

mod config;
mod directive;
mod error;
mod extract;
mod hooks;
mod locations;
mod metadata;
mod naming;
mod properties;
mod registry;
mod resolver;
mod types;
mod value;

pub use config::{ConfigError, DirectiveSettings, DuplicateMarkerPolicy, GeneratorSettings, SchemaGeneratorConfig};
pub use directive::{Directive, DirectiveArgument};
pub use error::BuildError;
pub use hooks::{NoopHooks, SchemaGeneratorHooks};
pub use locations::DirectiveLocations;
pub use metadata::*;
pub use properties::{HookPropertyFilter, PropertyFilter};
pub use registry::DirectiveRegistry;
pub use resolver::DirectiveResolver;
pub use types::{DefaultTypeMapper, InputType, PropertyType, TypeMapper};
pub use value::Value;

#[cfg(feature = "derive")]
pub use graphql_schema_directives_derive::Directive;
