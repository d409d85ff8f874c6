use std::{
    fmt::Write as _,
    sync::{Arc, Mutex, PoisonError},
};

use dashmap::DashMap;

use crate::Directive;

/// Directive definitions built during a generation run, by name.
///
/// A name is bound at most once and entries are never removed, so every caller resolving a
/// given name observes the same definition.
#[derive(Debug, Default)]
pub struct DirectiveRegistry {
    definitions: DashMap<String, Arc<Directive>>,
    // Serializes builds of one name. No map lock is held while building.
    build_locks: DashMap<String, Arc<Mutex<()>>>,
}

impl DirectiveRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<Arc<Directive>> {
        self.definitions.get(name).map(|entry| Arc::clone(entry.value()))
    }

    /// Returns the definition registered under `name`, building and registering it first if
    /// there is none.
    ///
    /// Concurrent callers for the same name wait for the first build to complete and reuse its
    /// result. If `build` fails nothing is registered. `build` may read the registry and build
    /// other names, but must not build `name` again.
    pub fn get_or_try_insert_with<E>(
        &self,
        name: &str,
        build: impl FnOnce() -> Result<Directive, E>,
    ) -> Result<Arc<Directive>, E> {
        if let Some(definition) = self.get(name) {
            return Ok(definition);
        }

        let lock = Arc::clone(self.build_locks.entry(name.to_owned()).or_default().value());
        let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);

        match self.definitions.get(name) {
            Some(definition) => Ok(Arc::clone(definition.value())),
            None => {
                let definition = Arc::new(build()?);
                self.definitions.insert(name.to_owned(), Arc::clone(&definition));

                Ok(definition)
            }
        }
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// All the definitions, sorted by name.
    pub fn definitions(&self) -> Vec<Arc<Directive>> {
        let mut definitions: Vec<_> = self
            .definitions
            .iter()
            .map(|entry| Arc::clone(entry.value()))
            .collect();

        definitions.sort_by(|a, b| a.name.cmp(&b.name));
        definitions
    }

    /// Renders every definition as SDL, sorted by name and separated by blank lines.
    pub fn render_sdl(&self) -> String {
        let mut sdl = String::new();

        for definition in self.definitions() {
            if !sdl.is_empty() {
                sdl.push('\n');
            }

            writeln!(sdl, "{}", definition.definition_sdl()).ok();
        }

        sdl
    }
}
