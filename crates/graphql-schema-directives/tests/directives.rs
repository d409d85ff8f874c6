use std::sync::Arc;

use graphql_schema_directives::{
    Annotation, AnnotationType, BuildError, ClassMetadata, Directive, DirectiveAnnotation, DirectiveLocations,
    DirectiveMarker, DirectiveResolver, FieldMetadata, GeneratorSettings, InputType, IntoAnnotation, MetaAnnotation,
    ParameterMetadata, PropertyDescriptor, PropertyMetadata, PropertyType, SchemaGeneratorConfig,
    SchemaGeneratorHooks, Value,
};

#[derive(Directive)]
#[directive(description = "Limits the number of calls", locations(FIELD_DEFINITION, OBJECT))]
struct RateLimit {
    threshold: i32,
    #[directive(rename = "windowSeconds")]
    window_seconds: Option<i32>,
}

#[derive(Directive)]
#[directive(name = "internal_only", locations(OBJECT))]
struct Internal;

#[derive(Directive)]
#[directive(locations(FIELD_DEFINITION))]
struct Tagged {
    tags: Vec<String>,
    #[directive(skip)]
    #[allow(dead_code)]
    source: std::path::PathBuf,
}

#[derive(Directive)]
#[directive(locations(FIELD_DEFINITION))]
struct Quota {
    limit: i64,
}

fn resolver() -> DirectiveResolver {
    DirectiveResolver::new(&SchemaGeneratorConfig::default())
}

fn deprecated() -> Annotation {
    Annotation::new(Arc::new(
        AnnotationType::new("Deprecated")
            .with_meta_annotation(MetaAnnotation::Other("Retention".into()))
            .with_property(PropertyDescriptor::new("reason", PropertyType::String)),
    ))
    .with_value("reason", "use v2")
}

fn names(directives: &[Arc<Directive>]) -> Vec<&str> {
    directives.iter().map(|directive| directive.name.as_str()).collect()
}

#[test]
fn annotations_without_marker_are_skipped() {
    let field = FieldMetadata::new("posts")
        .with_annotation(deprecated())
        .with_annotation(RateLimit {
            threshold: 3,
            window_seconds: None,
        });

    let directives = resolver().field_directives(&field).unwrap();

    assert_eq!(names(&directives), ["rateLimit"]);
}

#[test]
fn explicit_name_is_used_verbatim() {
    let class = ClassMetadata::new("AuditLog").with_annotation(Internal);

    let directives = resolver().directives(&class, None).unwrap();

    assert_eq!(names(&directives), ["internal_only"]);
}

#[test]
fn name_defaults_to_lower_camel_case_type_name() {
    let field = FieldMetadata::new("tags").with_annotation(Tagged {
        tags: vec!["a".into()],
        source: Default::default(),
    });

    let directives = resolver().field_directives(&field).unwrap();

    assert_eq!(names(&directives), ["tagged"]);
}

#[test]
fn occurrences_share_the_definition_shape() {
    let resolver = resolver();

    let posts = FieldMetadata::new("posts").with_annotation(RateLimit {
        threshold: 3,
        window_seconds: Some(60),
    });
    let comments = FieldMetadata::new("comments").with_annotation(RateLimit {
        threshold: 100,
        window_seconds: None,
    });

    let posts = resolver.field_directives(&posts).unwrap().remove(0);
    let comments = resolver.field_directives(&comments).unwrap().remove(0);

    assert_eq!(posts.name, comments.name);
    assert_eq!(posts.locations, comments.locations);
    assert_eq!(posts.description, comments.description);

    let shape = |directive: &Directive| {
        directive
            .arguments
            .iter()
            .map(|argument| (argument.name.clone(), argument.ty.to_string()))
            .collect::<Vec<_>>()
    };
    assert_eq!(shape(&posts), shape(&comments));

    assert_eq!(posts.to_string(), "@rateLimit(threshold: 3, windowSeconds: 60)");
    assert_eq!(comments.to_string(), "@rateLimit(threshold: 100, windowSeconds: null)");
    assert_eq!(resolver.registry().len(), 1);
}

#[test]
fn argument_free_directives_are_shared() {
    let resolver = resolver();

    let audit_log = ClassMetadata::new("AuditLog").with_annotation(Internal);
    let secrets = ClassMetadata::new("Secrets").with_annotation(Internal);

    let first = resolver.directives(&audit_log, None).unwrap().remove(0);
    let second = resolver.directives(&secrets, None).unwrap().remove(0);
    let definition = resolver.registry().get("internal_only").unwrap();

    assert!(Arc::ptr_eq(&first, &second));
    assert!(Arc::ptr_eq(&first, &definition));
}

#[test]
fn occurrence_values_do_not_leak_into_the_definition() {
    let rate_limit = Arc::new(
        AnnotationType::new("RateLimit")
            .with_meta_annotation(DirectiveMarker::new().locations(DirectiveLocations::FIELD_DEFINITION))
            .with_property(PropertyDescriptor::new("threshold", PropertyType::Int).with_default(5)),
    );

    let resolver = resolver();

    let defaulted = FieldMetadata::new("posts").with_annotation(Annotation::new(rate_limit.clone()));
    let explicit =
        FieldMetadata::new("comments").with_annotation(Annotation::new(rate_limit).with_value("threshold", 10));

    let defaulted = resolver.field_directives(&defaulted).unwrap().remove(0);
    let explicit = resolver.field_directives(&explicit).unwrap().remove(0);
    let definition = resolver.registry().get("rateLimit").unwrap();

    assert_eq!(defaulted.argument("threshold").unwrap().value, Value::Int(5));
    assert_eq!(explicit.argument("threshold").unwrap().value, Value::Int(10));
    assert_eq!(definition.argument("threshold").unwrap().value, Value::Int(5));
    assert!(!Arc::ptr_eq(&explicit, &definition));
}

#[test]
fn rendered_defaults_do_not_depend_on_the_first_occurrence() {
    let rate_limit = Arc::new(
        AnnotationType::new("RateLimit")
            .with_meta_annotation(DirectiveMarker::new().locations(DirectiveLocations::FIELD_DEFINITION))
            .with_property(PropertyDescriptor::new("threshold", PropertyType::Int).with_default(5)),
    );

    let defaulted = FieldMetadata::new("posts").with_annotation(Annotation::new(rate_limit.clone()));
    let explicit =
        FieldMetadata::new("comments").with_annotation(Annotation::new(rate_limit).with_value("threshold", 10));

    let explicit_first = resolver();
    let explicit_directive = explicit_first.field_directives(&explicit).unwrap().remove(0);
    let defaulted_directive = explicit_first.field_directives(&defaulted).unwrap().remove(0);

    let defaulted_first = resolver();
    defaulted_first.field_directives(&defaulted).unwrap();
    defaulted_first.field_directives(&explicit).unwrap();

    assert_eq!(explicit_directive.to_string(), "@rateLimit(threshold: 10)");
    assert_eq!(defaulted_directive.to_string(), "@rateLimit(threshold: 5)");

    let definition = explicit_first.registry().get("rateLimit").unwrap();
    assert_eq!(definition.argument("threshold").unwrap().value, Value::Int(10));
    assert_eq!(definition.argument("threshold").unwrap().default_value, Some(Value::Int(5)));

    pretty_assertions::assert_eq!(
        explicit_first.registry().render_sdl(),
        defaulted_first.registry().render_sdl()
    );
    insta::assert_snapshot!(
        explicit_first.registry().render_sdl().trim_end(),
        @"directive @rateLimit(threshold: Int! = 5) on FIELD_DEFINITION"
    );
}

#[test]
fn values_are_matched_by_name() {
    // Two declarations of the same directive name with their properties in opposite order.
    let marker = || DirectiveMarker::new().name("limits").locations(DirectiveLocations::OBJECT);

    let forward = Arc::new(
        AnnotationType::new("LimitsV1")
            .with_meta_annotation(marker())
            .with_property(PropertyDescriptor::new("min", PropertyType::Int))
            .with_property(PropertyDescriptor::new("max", PropertyType::Int)),
    );
    let backward = Arc::new(
        AnnotationType::new("LimitsV2")
            .with_meta_annotation(marker())
            .with_property(PropertyDescriptor::new("max", PropertyType::Int))
            .with_property(PropertyDescriptor::new("min", PropertyType::Int)),
    );

    let resolver = resolver();

    let first = ClassMetadata::new("A").with_annotation(Annotation::new(forward).with_value("min", 1).with_value("max", 2));
    let second =
        ClassMetadata::new("B").with_annotation(Annotation::new(backward).with_value("max", 20).with_value("min", 10));

    let first = resolver.directives(&first, None).unwrap().remove(0);
    let second = resolver.directives(&second, None).unwrap().remove(0);

    assert_eq!(first.to_string(), "@limits(min: 1, max: 2)");
    assert_eq!(second.to_string(), "@limits(min: 10, max: 20)");
}

#[test]
fn property_directives_include_constructor_parameter_annotations() {
    let class = ClassMetadata::new("Post")
        .with_property(PropertyMetadata::new("body").with_annotation(deprecated()))
        .with_constructor_parameter(ParameterMetadata::new("body").with_annotation(RateLimit {
            threshold: 1,
            window_seconds: Some(1),
        }));

    let resolver = resolver();
    let body = class.property("body").unwrap();

    let with_parent = resolver.directives(body, Some(&class)).unwrap();
    assert_eq!(names(&with_parent), ["rateLimit"]);

    let without_parent = resolver.directives(body, None).unwrap();
    assert!(without_parent.is_empty());
}

#[test]
fn skipped_fields_are_not_arguments() {
    let resolver = resolver();
    let field = FieldMetadata::new("tags").with_annotation(Tagged {
        tags: vec!["a".into(), "b".into()],
        source: Default::default(),
    });

    let directive = resolver.field_directives(&field).unwrap().remove(0);

    assert_eq!(directive.to_string(), r#"@tagged(tags: ["a", "b"])"#);
    assert!(directive.argument("source").is_none());
    assert!(Tagged::annotation_type().property("source").is_some_and(|property| property.ignored));
}

#[test]
fn unsupported_argument_types_fail_the_run() {
    let resolver = resolver();
    let field = FieldMetadata::new("uploads").with_annotation(Quota { limit: 1 << 40 });

    let err = resolver.field_directives(&field).unwrap_err();

    assert_eq!(
        err,
        BuildError::UnsupportedArgumentType {
            directive: "quota".into(),
            property: "limit".into(),
            ty: PropertyType::Long,
        }
    );
    insta::assert_snapshot!(err, @"Property 'limit' of directive @quota has type Long, which has no GraphQL input type");
    assert!(resolver.registry().get("quota").is_none());
}

#[test]
fn hooks_provide_custom_scalars() {
    struct LongScalar;

    impl SchemaGeneratorHooks for LongScalar {
        fn will_generate_graphql_type(&self, ty: &PropertyType) -> Option<InputType> {
            matches!(ty, PropertyType::Long).then(|| InputType::named("Long"))
        }
    }

    let config = SchemaGeneratorConfig::default().with_hooks(LongScalar);
    let resolver = DirectiveResolver::new(&config);
    let field = FieldMetadata::new("uploads").with_annotation(Quota { limit: 1 << 40 });

    let directive = resolver.field_directives(&field).unwrap().remove(0);

    assert_eq!(directive.to_string(), "@quota(limit: 1099511627776)");
    assert_eq!(directive.argument("limit").unwrap().ty.to_string(), "Long!");
}

#[test]
fn hooks_exclude_properties() {
    struct NoWindow;

    impl SchemaGeneratorHooks for NoWindow {
        fn is_valid_property(&self, owner: &AnnotationType, property: &PropertyDescriptor) -> bool {
            !(owner.simple_name() == "RateLimit" && property.name == "windowSeconds")
        }
    }

    let resolver = DirectiveResolver::new(&SchemaGeneratorConfig::default().with_hooks(NoWindow));
    let field = FieldMetadata::new("posts").with_annotation(RateLimit {
        threshold: 3,
        window_seconds: Some(60),
    });

    let directive = resolver.field_directives(&field).unwrap().remove(0);

    assert_eq!(directive.to_string(), "@rateLimit(threshold: 3)");
}

#[test]
fn duplicate_markers_follow_the_settings() {
    let twice = Arc::new(
        AnnotationType::new("Twice")
            .with_meta_annotation(DirectiveMarker::new().name("first").locations(DirectiveLocations::OBJECT))
            .with_meta_annotation(DirectiveMarker::new().name("second").locations(DirectiveLocations::OBJECT)),
    );
    let class = ClassMetadata::new("A").with_annotation(Annotation::new(twice));

    let directives = resolver().directives(&class, None).unwrap();
    assert_eq!(names(&directives), ["first"]);

    let settings = GeneratorSettings::from_toml("[directives]\nduplicate_marker = \"reject\"").unwrap();
    let strict = DirectiveResolver::new(&SchemaGeneratorConfig::new(settings));

    let err = strict.directives(&class, None).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Annotation type Twice carries 2 directive markers, expected one"
    );
}

#[test]
fn registry_renders_the_definitions() {
    let resolver = resolver();

    let class = ClassMetadata::new("Post")
        .with_annotation(Internal)
        .with_annotation(RateLimit {
            threshold: 10,
            window_seconds: Some(60),
        });
    let field = FieldMetadata::new("tags").with_annotation(Tagged {
        tags: Vec::new(),
        source: Default::default(),
    });

    resolver.directives(&class, None).unwrap();
    resolver.field_directives(&field).unwrap();

    insta::assert_snapshot!(resolver.registry().render_sdl().trim_end(), @r#"
    directive @internal_only on OBJECT

    "Limits the number of calls"
    directive @rateLimit(threshold: Int!, windowSeconds: Int) on OBJECT | FIELD_DEFINITION

    directive @tagged(tags: [String!]!) on FIELD_DEFINITION
    "#);
}

#[test]
fn derived_annotations_convert_into_instances() {
    let annotation = RateLimit {
        threshold: 7,
        window_seconds: None,
    }
    .into_annotation();

    assert_eq!(annotation.annotation_type().simple_name(), "RateLimit");
    assert_eq!(annotation.value("threshold"), Some(&Value::Int(7)));
    assert_eq!(annotation.value("windowSeconds"), Some(&Value::Null));
    assert_eq!(
        RateLimit::annotation_type()
            .property("windowSeconds")
            .map(|property| &property.ty),
        Some(&PropertyType::optional(PropertyType::Int))
    );
}
