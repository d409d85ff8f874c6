use std::fmt;

use crate::{DirectiveLocations, Value, types::InputType, value::write_quoted};

/// A GraphQL schema directive.
///
/// The same type serves as the directive definition cached in the
/// [`DirectiveRegistry`](crate::DirectiveRegistry), where argument values are those of the
/// occurrence that built it, and as the instance attached to an element, where they are the
/// values of that occurrence.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Directive {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub locations: DirectiveLocations,
    pub arguments: Vec<DirectiveArgument>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct DirectiveArgument {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: InputType,
    pub value: Value,
    /// The default declared by the annotation property, the only one rendered in the
    /// definition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Value>,
}

impl Directive {
    pub fn argument(&self, name: &str) -> Option<&DirectiveArgument> {
        self.arguments.iter().find(|argument| argument.name == name)
    }

    pub fn has_arguments(&self) -> bool {
        !self.arguments.is_empty()
    }

    /// Renders the definition, e.g. `directive @rateLimit(threshold: Int! = 5) on OBJECT`.
    pub fn definition_sdl(&self) -> impl fmt::Display + '_ {
        DefinitionSdl(self)
    }
}

/// Renders the directive as applied to an element, e.g. `@rateLimit(threshold: 10)`.
impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.name)?;

        if self.arguments.is_empty() {
            return Ok(());
        }

        f.write_str("(")?;

        let mut arguments = self.arguments.iter().peekable();

        while let Some(argument) = arguments.next() {
            write!(f, "{}: {}", argument.name, argument.value)?;

            if arguments.peek().is_some() {
                f.write_str(", ")?;
            }
        }

        f.write_str(")")
    }
}

struct DefinitionSdl<'a>(&'a Directive);

impl fmt::Display for DefinitionSdl<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let directive = self.0;

        if let Some(description) = &directive.description {
            write_quoted(description, f)?;
            f.write_str("\n")?;
        }

        write!(f, "directive @{}", directive.name)?;

        if directive.has_arguments() {
            f.write_str("(")?;

            let mut arguments = directive.arguments.iter().peekable();

            while let Some(argument) = arguments.next() {
                write!(f, "{}: {}", argument.name, argument.ty)?;

                if let Some(default) = &argument.default_value {
                    write!(f, " = {default}")?;
                }

                if arguments.peek().is_some() {
                    f.write_str(", ")?;
                }
            }

            f.write_str(")")?;
        }

        write!(f, " on {}", directive.locations)
    }
}
