use std::sync::Arc;

use crate::{
    BuildError, Directive, DirectiveArgument, DirectiveRegistry, Value,
    config::{DirectiveSettings, SchemaGeneratorConfig},
    extract::{DirectiveInfo, element_annotations},
    metadata::{AnnotatedElement, Annotation, ClassMetadata, FieldMetadata},
    properties::{HookPropertyFilter, PropertyFilter},
    types::{DefaultTypeMapper, TypeMapper},
};

/// Finds the directive annotations of program elements and turns them into schema
/// directives.
///
/// Definitions are shared through the [`DirectiveRegistry`], so a single resolver, or several
/// resolvers sharing one registry, can be used from multiple threads during a run.
#[derive(Clone)]
pub struct DirectiveResolver {
    registry: Arc<DirectiveRegistry>,
    properties: Arc<dyn PropertyFilter>,
    types: Arc<dyn TypeMapper>,
    settings: DirectiveSettings,
}

impl DirectiveResolver {
    /// A resolver with a fresh registry and the default collaborators, driven by the config
    /// hooks.
    pub fn new(config: &SchemaGeneratorConfig) -> Self {
        Self {
            registry: Arc::new(DirectiveRegistry::new()),
            properties: Arc::new(HookPropertyFilter::new(Arc::clone(&config.hooks))),
            types: Arc::new(DefaultTypeMapper::new(Arc::clone(&config.hooks))),
            settings: config.settings.directives.clone(),
        }
    }

    pub fn with_registry(mut self, registry: Arc<DirectiveRegistry>) -> Self {
        self.registry = registry;
        self
    }

    pub fn with_property_filter(mut self, properties: impl PropertyFilter + 'static) -> Self {
        self.properties = Arc::new(properties);
        self
    }

    pub fn with_type_mapper(mut self, types: impl TypeMapper + 'static) -> Self {
        self.types = Arc::new(types);
        self
    }

    pub fn registry(&self) -> &Arc<DirectiveRegistry> {
        &self.registry
    }

    /// The directives of `element`. `parent` is the class owning the element when it is a
    /// property.
    pub fn directives<'a>(
        &self,
        element: impl Into<AnnotatedElement<'a>>,
        parent: Option<&'a ClassMetadata>,
    ) -> Result<Vec<Arc<Directive>>, BuildError> {
        self.resolve_all(element_annotations(element.into(), parent))
    }

    /// The directives of a raw field, from the annotations written on it.
    pub fn field_directives(&self, field: &FieldMetadata) -> Result<Vec<Arc<Directive>>, BuildError> {
        self.resolve_all(field.annotations.iter())
    }

    fn resolve_all<'a>(
        &self,
        annotations: impl IntoIterator<Item = &'a Annotation>,
    ) -> Result<Vec<Arc<Directive>>, BuildError> {
        let mut directives = Vec::new();

        for annotation in annotations {
            if let Some(info) = DirectiveInfo::extract(annotation, self.settings.duplicate_marker)? {
                directives.push(self.resolve(&info)?);
            }
        }

        Ok(directives)
    }

    fn resolve(&self, info: &DirectiveInfo<'_>) -> Result<Arc<Directive>, BuildError> {
        let name = info.effective_name();

        let definition = self
            .registry
            .get_or_try_insert_with(&name, || self.build_definition(&name, info))?;

        if !definition.has_arguments() {
            return Ok(definition);
        }

        let mut directive = Directive::clone(&definition);

        for argument in &mut directive.arguments {
            argument.value = argument_value(info.annotation, &name, &argument.name)?;
        }

        Ok(Arc::new(directive))
    }

    fn build_definition(&self, name: &str, info: &DirectiveInfo<'_>) -> Result<Directive, BuildError> {
        let annotation_type = info.annotation.annotation_type();
        let properties = self.properties.valid_properties(annotation_type);
        let mut arguments = Vec::with_capacity(properties.len());

        for property in properties {
            let ty = self
                .types
                .argument_type(&property.ty)
                .ok_or_else(|| BuildError::UnsupportedArgumentType {
                    directive: name.to_owned(),
                    property: property.name.clone(),
                    ty: property.ty.clone(),
                })?;

            if let Some(default) = &property.default {
                ensure_literal(default, name, &property.name)?;
            }

            arguments.push(DirectiveArgument {
                name: property.name.clone(),
                ty,
                value: argument_value(info.annotation, name, &property.name)?,
                default_value: property.default.clone(),
            });
        }

        tracing::debug!(
            directive = name,
            annotation = annotation_type.simple_name(),
            arguments = arguments.len(),
            "built directive definition"
        );

        Ok(Directive {
            name: name.to_owned(),
            description: Some(info.marker.description.clone()).filter(|description| !description.is_empty()),
            locations: info.marker.locations,
            arguments,
        })
    }
}

fn argument_value(annotation: &Annotation, directive: &str, property: &str) -> Result<Value, BuildError> {
    let value = annotation
        .value(property)
        .ok_or_else(|| BuildError::MissingArgumentValue {
            directive: directive.to_owned(),
            property: property.to_owned(),
        })?;

    ensure_literal(value, directive, property)?;

    Ok(value.clone())
}

fn ensure_literal(value: &Value, directive: &str, property: &str) -> Result<(), BuildError> {
    match value.non_finite_float() {
        Some(value) => Err(BuildError::NonFiniteFloat {
            directive: directive.to_owned(),
            property: property.to_owned(),
            value,
        }),
        None => Ok(()),
    }
}
