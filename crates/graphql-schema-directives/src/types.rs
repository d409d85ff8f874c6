use std::{fmt, sync::Arc};

use crate::hooks::SchemaGeneratorHooks;

/// The declared type of an annotation property.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PropertyType {
    Int,
    /// A 64-bit integer. GraphQL has no built-in scalar for it, a hook must provide one.
    Long,
    Float,
    String,
    Boolean,
    Id,
    /// An enum, mapped to the GraphQL enum of the same name.
    Enum(String),
    List(Box<PropertyType>),
    /// A property that may hold no value. Every other type maps to a non-null input type.
    Optional(Box<PropertyType>),
    /// Any other type, identified by its name.
    Custom(String),
}

impl PropertyType {
    pub fn list(inner: PropertyType) -> Self {
        PropertyType::List(Box::new(inner))
    }

    pub fn optional(inner: PropertyType) -> Self {
        PropertyType::Optional(Box::new(inner))
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyType::Int => f.write_str("Int"),
            PropertyType::Long => f.write_str("Long"),
            PropertyType::Float => f.write_str("Float"),
            PropertyType::String => f.write_str("String"),
            PropertyType::Boolean => f.write_str("Boolean"),
            PropertyType::Id => f.write_str("ID"),
            PropertyType::Enum(name) | PropertyType::Custom(name) => f.write_str(name),
            PropertyType::List(inner) => write!(f, "List<{inner}>"),
            PropertyType::Optional(inner) => write!(f, "{inner}?"),
        }
    }
}

/// A GraphQL input type reference, such as `[String!]!`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum InputType {
    Named(String),
    List(Box<InputType>),
    NonNull(Box<InputType>),
}

impl InputType {
    pub fn named(name: impl Into<String>) -> Self {
        InputType::Named(name.into())
    }

    pub fn non_null(self) -> Self {
        match self {
            InputType::NonNull(_) => self,
            other => InputType::NonNull(Box::new(other)),
        }
    }

    pub fn list_of(self) -> Self {
        InputType::List(Box::new(self))
    }

    /// The name of the innermost named type.
    pub fn base_name(&self) -> &str {
        match self {
            InputType::Named(name) => name,
            InputType::List(inner) | InputType::NonNull(inner) => inner.base_name(),
        }
    }

    pub fn is_required(&self) -> bool {
        matches!(self, InputType::NonNull(_))
    }
}

impl fmt::Display for InputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputType::Named(name) => f.write_str(name),
            InputType::List(inner) => write!(f, "[{inner}]"),
            InputType::NonNull(inner) => write!(f, "{inner}!"),
        }
    }
}

impl serde::Serialize for InputType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Maps the declared type of an annotation property to the GraphQL type of the directive
/// argument it becomes.
pub trait TypeMapper: Send + Sync {
    /// Returns `None` when the type has no GraphQL counterpart.
    fn argument_type(&self, ty: &PropertyType) -> Option<InputType>;
}

/// Maps the built-in scalars, enums and lists, and defers to
/// [`SchemaGeneratorHooks::will_generate_graphql_type`] before anything else.
pub struct DefaultTypeMapper {
    hooks: Arc<dyn SchemaGeneratorHooks>,
}

impl DefaultTypeMapper {
    pub fn new(hooks: Arc<dyn SchemaGeneratorHooks>) -> Self {
        Self { hooks }
    }

    fn nullable_type(&self, ty: &PropertyType) -> Option<InputType> {
        if let Some(ty) = self.hooks.will_generate_graphql_type(ty) {
            return Some(ty);
        }

        let ty = match ty {
            PropertyType::Int => InputType::named("Int"),
            PropertyType::Float => InputType::named("Float"),
            PropertyType::String => InputType::named("String"),
            PropertyType::Boolean => InputType::named("Boolean"),
            PropertyType::Id => InputType::named("ID"),
            PropertyType::Enum(name) => InputType::named(name.as_str()),
            PropertyType::List(inner) => self.argument_type(inner)?.list_of(),
            PropertyType::Optional(inner) => return self.nullable_type(inner),
            PropertyType::Long | PropertyType::Custom(_) => return None,
        };

        Some(ty)
    }
}

impl TypeMapper for DefaultTypeMapper {
    fn argument_type(&self, ty: &PropertyType) -> Option<InputType> {
        let mapped = self.nullable_type(ty)?;

        Some(match ty {
            PropertyType::Optional(_) => mapped,
            _ => mapped.non_null(),
        })
    }
}
