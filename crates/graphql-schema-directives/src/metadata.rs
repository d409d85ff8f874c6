//! Statically declared annotation metadata.
//!
//! Annotation types are described once, with their meta-annotations and properties, and
//! annotation instances point back to their [`AnnotationType`]. Types deriving
//! [`Directive`](macro@crate::Directive) get their description generated.

mod element;

pub use element::*;

use std::sync::Arc;

use indexmap::IndexMap;

use crate::{DirectiveLocations, Value, types::PropertyType};

/// The declaration of an annotation type.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotationType {
    simple_name: String,
    meta_annotations: Vec<MetaAnnotation>,
    properties: Vec<PropertyDescriptor>,
}

impl AnnotationType {
    pub fn new(simple_name: impl Into<String>) -> Self {
        Self {
            simple_name: simple_name.into(),
            meta_annotations: Vec::new(),
            properties: Vec::new(),
        }
    }

    pub fn with_meta_annotation(mut self, meta_annotation: impl Into<MetaAnnotation>) -> Self {
        self.meta_annotations.push(meta_annotation.into());
        self
    }

    pub fn with_property(mut self, property: PropertyDescriptor) -> Self {
        self.properties.push(property);
        self
    }

    pub fn simple_name(&self) -> &str {
        &self.simple_name
    }

    pub fn meta_annotations(&self) -> &[MetaAnnotation] {
        &self.meta_annotations
    }

    /// Properties in declaration order.
    pub fn properties(&self) -> &[PropertyDescriptor] {
        &self.properties
    }

    pub fn property(&self, name: &str) -> Option<&PropertyDescriptor> {
        self.properties.iter().find(|property| property.name == name)
    }

    /// All the directive markers on this type, in declaration order.
    pub fn directive_markers(&self) -> impl Iterator<Item = &DirectiveMarker> {
        self.meta_annotations.iter().filter_map(|meta| match meta {
            MetaAnnotation::Directive(marker) => Some(marker),
            MetaAnnotation::Other(_) => None,
        })
    }
}

/// An annotation placed on an annotation type.
#[derive(Debug, Clone, PartialEq)]
pub enum MetaAnnotation {
    /// Instances of the annotated type are schema directives.
    Directive(DirectiveMarker),
    /// Any other meta-annotation, irrelevant for directives.
    Other(String),
}

impl From<DirectiveMarker> for MetaAnnotation {
    fn from(marker: DirectiveMarker) -> Self {
        MetaAnnotation::Directive(marker)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DirectiveMarker {
    /// Explicit directive name. Empty means the name is derived from the annotation type.
    pub name: String,
    pub description: String,
    pub locations: DirectiveLocations,
}

impl DirectiveMarker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn locations(mut self, locations: DirectiveLocations) -> Self {
        self.locations |= locations;
        self
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Public,
    Private,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PropertyDescriptor {
    pub name: String,
    pub ty: PropertyType,
    /// Used when an annotation instance does not set the property.
    pub default: Option<Value>,
    pub visibility: Visibility,
    /// Excluded from the schema regardless of hooks.
    pub ignored: bool,
}

impl PropertyDescriptor {
    pub fn new(name: impl Into<String>, ty: PropertyType) -> Self {
        Self {
            name: name.into(),
            ty,
            default: None,
            visibility: Visibility::Public,
            ignored: false,
        }
    }

    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn private(mut self) -> Self {
        self.visibility = Visibility::Private;
        self
    }

    pub fn ignored(mut self) -> Self {
        self.ignored = true;
        self
    }
}

/// One occurrence of an annotation on a program element.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    ty: Arc<AnnotationType>,
    values: IndexMap<String, Value>,
}

impl Annotation {
    pub fn new(ty: Arc<AnnotationType>) -> Self {
        Self {
            ty,
            values: IndexMap::new(),
        }
    }

    pub fn with_value(mut self, property: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.insert(property.into(), value.into());
        self
    }

    pub fn annotation_type(&self) -> &AnnotationType {
        &self.ty
    }

    /// The value of a property for this occurrence, falling back to the declared default.
    pub fn value(&self, property: &str) -> Option<&Value> {
        self.values
            .get(property)
            .or_else(|| self.ty.property(property).and_then(|property| property.default.as_ref()))
    }
}

/// Conversion into an [`Annotation`] instance.
pub trait IntoAnnotation {
    fn into_annotation(self) -> Annotation;
}

impl IntoAnnotation for Annotation {
    fn into_annotation(self) -> Annotation {
        self
    }
}

/// A Rust type standing for an annotation type. Usually derived with
/// [`Directive`](macro@crate::Directive).
pub trait DirectiveAnnotation: IntoAnnotation {
    fn annotation_type() -> Arc<AnnotationType>;
}

/// A Rust type usable as the type of a directive annotation property.
pub trait ArgumentValue {
    fn property_type() -> PropertyType;

    fn into_value(self) -> Value;
}

macro_rules! argument_value {
    ($($ty:ty => $property_type:expr),* $(,)?) => {
        $(
            impl ArgumentValue for $ty {
                fn property_type() -> PropertyType {
                    $property_type
                }

                fn into_value(self) -> Value {
                    Value::from(self)
                }
            }
        )*
    };
}

argument_value! {
    bool => PropertyType::Boolean,
    i32 => PropertyType::Int,
    i64 => PropertyType::Long,
    f64 => PropertyType::Float,
    String => PropertyType::String,
    &'static str => PropertyType::String,
}

impl ArgumentValue for f32 {
    fn property_type() -> PropertyType {
        PropertyType::Float
    }

    fn into_value(self) -> Value {
        Value::Float(self.into())
    }
}

impl<T: ArgumentValue> ArgumentValue for Vec<T> {
    fn property_type() -> PropertyType {
        PropertyType::list(T::property_type())
    }

    fn into_value(self) -> Value {
        Value::List(self.into_iter().map(ArgumentValue::into_value).collect())
    }
}

impl<T: ArgumentValue> ArgumentValue for Option<T> {
    fn property_type() -> PropertyType {
        PropertyType::optional(T::property_type())
    }

    fn into_value(self) -> Value {
        self.map(ArgumentValue::into_value).unwrap_or(Value::Null)
    }
}
