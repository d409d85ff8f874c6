use crate::types::PropertyType;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum BuildError {
    #[error("Property '{property}' of directive @{directive} has type {ty}, which has no GraphQL input type")]
    UnsupportedArgumentType {
        directive: String,
        property: String,
        ty: PropertyType,
    },
    #[error("Property '{property}' of directive @{directive} has no value and no default")]
    MissingArgumentValue { directive: String, property: String },
    #[error("Property '{property}' of directive @{directive} has the value {value}, which is not a GraphQL literal")]
    NonFiniteFloat {
        directive: String,
        property: String,
        value: f64,
    },
    #[error("Annotation type {annotation} carries {count} directive markers, expected one")]
    DuplicateDirectiveMarker { annotation: String, count: usize },
}
