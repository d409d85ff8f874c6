use crate::{
    metadata::{AnnotationType, PropertyDescriptor},
    types::{InputType, PropertyType},
};

/// Customization points of the schema generation run.
///
/// Every method has a default implementation, so implementors only override what they need.
///
/// Hooks are called while a directive definition is being built, possibly from several
/// threads. They may read the [`DirectiveRegistry`](crate::DirectiveRegistry), but resolving
/// the directive under construction from within a hook deadlocks.
pub trait SchemaGeneratorHooks: Send + Sync {
    /// Whether `property` of `owner` may become a directive argument.
    fn is_valid_property(&self, owner: &AnnotationType, property: &PropertyDescriptor) -> bool {
        let _ = (owner, property);
        true
    }

    /// Provides the GraphQL type for a property type, before the built-in mapping is tried.
    /// This is where custom scalars are plugged in.
    fn will_generate_graphql_type(&self, ty: &PropertyType) -> Option<InputType> {
        let _ = ty;
        None
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopHooks;

impl SchemaGeneratorHooks for NoopHooks {}
