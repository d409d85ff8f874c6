use std::sync::Arc;

use crate::{
    hooks::SchemaGeneratorHooks,
    metadata::{AnnotationType, PropertyDescriptor, Visibility},
};

/// Selects the properties of an annotation type that become directive arguments.
pub trait PropertyFilter: Send + Sync {
    /// The usable properties, in the order their arguments are declared.
    fn valid_properties<'a>(&self, ty: &'a AnnotationType) -> Vec<&'a PropertyDescriptor>;
}

/// Keeps public, non-ignored properties accepted by
/// [`SchemaGeneratorHooks::is_valid_property`].
pub struct HookPropertyFilter {
    hooks: Arc<dyn SchemaGeneratorHooks>,
}

impl HookPropertyFilter {
    pub fn new(hooks: Arc<dyn SchemaGeneratorHooks>) -> Self {
        Self { hooks }
    }
}

impl PropertyFilter for HookPropertyFilter {
    fn valid_properties<'a>(&self, ty: &'a AnnotationType) -> Vec<&'a PropertyDescriptor> {
        ty.properties()
            .iter()
            .filter(|property| {
                let valid = property.visibility == Visibility::Public
                    && !property.ignored
                    && self.hooks.is_valid_property(ty, property);

                if !valid {
                    tracing::trace!(annotation = ty.simple_name(), property = %property.name, "property excluded");
                }

                valid
            })
            .collect()
    }
}
