mod attributes;

use attributes::{ContainerAttributes, FieldAttributes};
use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, spanned::Spanned};

/// Declares a struct as a directive annotation type.
///
/// ```ignore
/// #[derive(Directive)]
/// #[directive(description = "Limits calls", locations(FIELD_DEFINITION))]
/// struct RateLimit {
///     threshold: i32,
///     #[directive(rename = "windowSeconds")]
///     window_seconds: i32,
/// }
/// ```
#[proc_macro_derive(Directive, attributes(directive))]
pub fn directive(input: TokenStream) -> TokenStream {
    let ast = syn::parse_macro_input!(input as DeriveInput);

    expand(ast).unwrap_or_else(syn::Error::into_compile_error).into()
}

fn expand(ast: DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    if !ast.generics.params.is_empty() {
        return Err(syn::Error::new(
            ast.generics.span(),
            "directive annotation types cannot be generic",
        ));
    }

    let name = &ast.ident;
    let simple_name = name.to_string();
    let container = ContainerAttributes::parse(&ast.attrs)?;

    let fields: Vec<&syn::Field> = match &ast.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => fields.named.iter().collect(),
            Fields::Unit => Vec::new(),
            Fields::Unnamed(_) => {
                return Err(syn::Error::new(
                    ast.span(),
                    "directive annotation types must have named fields",
                ));
            }
        },
        _ => return Err(syn::Error::new(ast.span(), "only structs can be directives")),
    };

    let mut properties = Vec::with_capacity(fields.len());
    let mut values = Vec::with_capacity(fields.len());

    for field in fields {
        let attributes = FieldAttributes::parse(&field.attrs)?;
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new(field.span(), "expected a named field"));
        };
        let ty = &field.ty;
        let property_name = attributes.rename.unwrap_or_else(|| ident.to_string());

        if attributes.skip {
            let type_name = quote!(#ty).to_string();

            properties.push(quote! {
                .with_property(
                    ::graphql_schema_directives::PropertyDescriptor::new(
                        #property_name,
                        ::graphql_schema_directives::PropertyType::Custom(#type_name.to_owned()),
                    )
                    .ignored()
                )
            });

            continue;
        }

        properties.push(quote! {
            .with_property(::graphql_schema_directives::PropertyDescriptor::new(
                #property_name,
                <#ty as ::graphql_schema_directives::ArgumentValue>::property_type(),
            ))
        });

        values.push(quote! {
            .with_value(#property_name, ::graphql_schema_directives::ArgumentValue::into_value(self.#ident))
        });
    }

    let marker_name = container.name.unwrap_or_default();
    let description = container.description.unwrap_or_default();
    let locations = container.locations.iter().map(|location| {
        quote!(::graphql_schema_directives::DirectiveLocations::#location)
    });

    Ok(quote! {
        impl ::graphql_schema_directives::DirectiveAnnotation for #name {
            fn annotation_type() -> ::std::sync::Arc<::graphql_schema_directives::AnnotationType> {
                static ANNOTATION_TYPE: ::std::sync::OnceLock<::std::sync::Arc<::graphql_schema_directives::AnnotationType>> =
                    ::std::sync::OnceLock::new();

                ::std::sync::Arc::clone(ANNOTATION_TYPE.get_or_init(|| {
                    ::std::sync::Arc::new(
                        ::graphql_schema_directives::AnnotationType::new(#simple_name)
                            .with_meta_annotation(
                                ::graphql_schema_directives::DirectiveMarker::new()
                                    .name(#marker_name)
                                    .description(#description)
                                    .locations(::graphql_schema_directives::DirectiveLocations::empty() #(| #locations)*)
                            )
                            #(#properties)*
                    )
                }))
            }
        }

        impl ::graphql_schema_directives::IntoAnnotation for #name {
            #[allow(unused_variables)]
            fn into_annotation(self) -> ::graphql_schema_directives::Annotation {
                ::graphql_schema_directives::Annotation::new(
                    <Self as ::graphql_schema_directives::DirectiveAnnotation>::annotation_type()
                )
                #(#values)*
            }
        }
    })
}
