use crate::{
    BuildError,
    config::DuplicateMarkerPolicy,
    metadata::{AnnotatedElement, Annotation, ClassMetadata, DirectiveMarker, PropertyMetadata},
    naming::lower_camel_case,
};

/// The annotations to inspect for directives on `element`.
///
/// Properties of a known class also get the annotations of the constructor parameter
/// declaring them.
pub(crate) fn element_annotations<'a>(
    element: AnnotatedElement<'a>,
    parent: Option<&'a ClassMetadata>,
) -> Vec<&'a Annotation> {
    match (element, parent) {
        (AnnotatedElement::Property(property), Some(parent)) => property_annotations(property, parent),
        _ => element.annotations().iter().collect(),
    }
}

fn property_annotations<'a>(property: &'a PropertyMetadata, parent: &'a ClassMetadata) -> Vec<&'a Annotation> {
    let mut annotations: Vec<&'a Annotation> = Vec::with_capacity(property.annotations.len());

    let parameter_annotations = parent
        .constructor_parameter(&property.name)
        .map(|parameter| parameter.annotations.as_slice())
        .unwrap_or_default();

    for annotation in property.annotations.iter().chain(parameter_annotations) {
        if !annotations.contains(&annotation) {
            annotations.push(annotation);
        }
    }

    annotations
}

/// An annotation whose type is marked as a directive.
#[derive(Debug)]
pub(crate) struct DirectiveInfo<'a> {
    pub annotation: &'a Annotation,
    pub marker: &'a DirectiveMarker,
}

impl<'a> DirectiveInfo<'a> {
    /// Returns `None` for annotations that are not directives.
    pub fn extract(annotation: &'a Annotation, policy: DuplicateMarkerPolicy) -> Result<Option<Self>, BuildError> {
        let ty = annotation.annotation_type();
        let mut markers = ty.directive_markers();

        let Some(marker) = markers.next() else {
            tracing::trace!(annotation = ty.simple_name(), "not a directive");
            return Ok(None);
        };

        if policy == DuplicateMarkerPolicy::Reject {
            let extra = markers.count();

            if extra > 0 {
                return Err(BuildError::DuplicateDirectiveMarker {
                    annotation: ty.simple_name().to_owned(),
                    count: extra + 1,
                });
            }
        }

        Ok(Some(DirectiveInfo { annotation, marker }))
    }

    pub fn effective_name(&self) -> String {
        if self.marker.name.is_empty() {
            lower_camel_case(self.annotation.annotation_type().simple_name())
        } else {
            self.marker.name.clone()
        }
    }
}
