/// Converts an `UpperCamelCase` type name to the `lowerCamelCase` directive name.
///
/// Only the first word is lowercased, and words start at every ASCII uppercase letter, so an
/// acronym keeps all but its first letter: `HTTPCache` becomes `hTTPCache`.
pub(crate) fn lower_camel_case(name: &str) -> String {
    let mut chars = name.chars();

    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(name.len());
            out.push(first.to_ascii_lowercase());
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}
