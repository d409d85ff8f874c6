use syn::{Attribute, Ident, LitStr};

/// `#[directive(name = "...", description = "...", locations(OBJECT, FIELD_DEFINITION))]`
#[derive(Default)]
pub(crate) struct ContainerAttributes {
    pub name: Option<String>,
    pub description: Option<String>,
    pub locations: Vec<Ident>,
}

impl ContainerAttributes {
    pub fn parse(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut attributes = Self::default();

        for attr in attrs.iter().filter(|attr| attr.path().is_ident("directive")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("name") {
                    attributes.name = Some(meta.value()?.parse::<LitStr>()?.value());
                    Ok(())
                } else if meta.path.is_ident("description") {
                    attributes.description = Some(meta.value()?.parse::<LitStr>()?.value());
                    Ok(())
                } else if meta.path.is_ident("locations") {
                    meta.parse_nested_meta(|location| {
                        let Some(ident) = location.path.get_ident() else {
                            return Err(location.error("expected a directive location such as OBJECT"));
                        };

                        attributes.locations.push(ident.clone());
                        Ok(())
                    })
                } else {
                    Err(meta.error("unsupported directive attribute, expected name, description or locations"))
                }
            })?;
        }

        Ok(attributes)
    }
}

/// `#[directive(rename = "...")]` or `#[directive(skip)]`
#[derive(Default)]
pub(crate) struct FieldAttributes {
    pub rename: Option<String>,
    pub skip: bool,
}

impl FieldAttributes {
    pub fn parse(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut attributes = Self::default();

        for attr in attrs.iter().filter(|attr| attr.path().is_ident("directive")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename") {
                    attributes.rename = Some(meta.value()?.parse::<LitStr>()?.value());
                    Ok(())
                } else if meta.path.is_ident("skip") {
                    attributes.skip = true;
                    Ok(())
                } else {
                    Err(meta.error("unsupported field attribute, expected rename or skip"))
                }
            })?;
        }

        Ok(attributes)
    }
}
