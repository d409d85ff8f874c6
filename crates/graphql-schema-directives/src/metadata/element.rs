use super::{Annotation, IntoAnnotation};

/// A program element that can carry annotations.
#[derive(Debug, Clone, Copy)]
pub enum AnnotatedElement<'a> {
    Class(&'a ClassMetadata),
    Property(&'a PropertyMetadata),
    Field(&'a FieldMetadata),
}

impl<'a> AnnotatedElement<'a> {
    pub fn name(&self) -> &'a str {
        match self {
            AnnotatedElement::Class(class) => &class.name,
            AnnotatedElement::Property(property) => &property.name,
            AnnotatedElement::Field(field) => &field.name,
        }
    }

    /// The annotations placed directly on the element.
    pub fn annotations(&self) -> &'a [Annotation] {
        match self {
            AnnotatedElement::Class(class) => &class.annotations,
            AnnotatedElement::Property(property) => &property.annotations,
            AnnotatedElement::Field(field) => &field.annotations,
        }
    }
}

impl<'a> From<&'a ClassMetadata> for AnnotatedElement<'a> {
    fn from(class: &'a ClassMetadata) -> Self {
        AnnotatedElement::Class(class)
    }
}

impl<'a> From<&'a PropertyMetadata> for AnnotatedElement<'a> {
    fn from(property: &'a PropertyMetadata) -> Self {
        AnnotatedElement::Property(property)
    }
}

impl<'a> From<&'a FieldMetadata> for AnnotatedElement<'a> {
    fn from(field: &'a FieldMetadata) -> Self {
        AnnotatedElement::Field(field)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ClassMetadata {
    pub name: String,
    pub annotations: Vec<Annotation>,
    pub properties: Vec<PropertyMetadata>,
    /// Parameters of the primary constructor. Annotations written on a constructor parameter
    /// that declares a property apply to that property too.
    pub constructor_parameters: Vec<ParameterMetadata>,
}

impl ClassMetadata {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_annotation(mut self, annotation: impl IntoAnnotation) -> Self {
        self.annotations.push(annotation.into_annotation());
        self
    }

    pub fn with_property(mut self, property: PropertyMetadata) -> Self {
        self.properties.push(property);
        self
    }

    pub fn with_constructor_parameter(mut self, parameter: ParameterMetadata) -> Self {
        self.constructor_parameters.push(parameter);
        self
    }

    pub fn property(&self, name: &str) -> Option<&PropertyMetadata> {
        self.properties.iter().find(|property| property.name == name)
    }

    pub fn constructor_parameter(&self, name: &str) -> Option<&ParameterMetadata> {
        self.constructor_parameters
            .iter()
            .find(|parameter| parameter.name == name)
    }
}

macro_rules! annotated {
    ($($(#[$meta:meta])* $name:ident),* $(,)?) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Default)]
            pub struct $name {
                pub name: String,
                pub annotations: Vec<Annotation>,
            }

            impl $name {
                pub fn new(name: impl Into<String>) -> Self {
                    Self {
                        name: name.into(),
                        annotations: Vec::new(),
                    }
                }

                pub fn with_annotation(mut self, annotation: impl IntoAnnotation) -> Self {
                    self.annotations.push(annotation.into_annotation());
                    self
                }
            }
        )*
    };
}

annotated! {
    /// A property declared by a class.
    PropertyMetadata,
    /// A primary constructor parameter.
    ParameterMetadata,
    /// A raw field, without property semantics.
    FieldMetadata,
}
