use std::fmt;

bitflags::bitflags! {
    /// Where a directive may be applied.
    ///
    /// Flags are declared in the order of the `__DirectiveLocation` enum, which is also the
    /// order they are rendered in.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
    pub struct DirectiveLocations: u32 {
        // Executable locations.
        const QUERY = 1;
        const MUTATION = 1 << 1;
        const SUBSCRIPTION = 1 << 2;
        const FIELD = 1 << 3;
        const FRAGMENT_DEFINITION = 1 << 4;
        const FRAGMENT_SPREAD = 1 << 5;
        const INLINE_FRAGMENT = 1 << 6;
        const VARIABLE_DEFINITION = 1 << 7;

        // Type system locations.
        const SCHEMA = 1 << 8;
        const SCALAR = 1 << 9;
        const OBJECT = 1 << 10;
        const FIELD_DEFINITION = 1 << 11;
        const ARGUMENT_DEFINITION = 1 << 12;
        const INTERFACE = 1 << 13;
        const UNION = 1 << 14;
        const ENUM = 1 << 15;
        const ENUM_VALUE = 1 << 16;
        const INPUT_OBJECT = 1 << 17;
        const INPUT_FIELD_DEFINITION = 1 << 18;
    }
}

/// Renders the locations as they appear after `on` in a directive definition, e.g.
/// `OBJECT | FIELD_DEFINITION`. Bits without a location name are not rendered.
impl fmt::Display for DirectiveLocations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, (name, _)) in self.iter_names().enumerate() {
            if idx > 0 {
                f.write_str(" | ")?;
            }

            f.write_str(name)?;
        }

        Ok(())
    }
}
