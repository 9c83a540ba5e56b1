//! Named entity collections.
//!
//! Every sibling collection in a project (the materials of an assembly,
//! the lights of an assembly, the colors of a scene, ...) is an
//! [`EntityContainer`] in which names are unique.

use std::collections::HashMap;

use crate::error::ProjectError;

/// An entity with a name, unique among its siblings.
pub trait Entity {
    /// The entity's name.
    fn name(&self) -> &str;
}

/// A collection of entities keyed by unique name, in insertion order.
#[derive(Debug, Clone)]
pub struct EntityContainer<T> {
    label: &'static str,
    items: Vec<T>,
    index: HashMap<String, usize>,
}

impl<T: Entity> EntityContainer<T> {
    /// Creates an empty container. `label` names the collection in errors.
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            items: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Insert an entity. Fails if its name is already taken.
    pub fn insert(&mut self, entity: T) -> Result<(), ProjectError> {
        let name = entity.name().to_string();
        if self.index.contains_key(&name) {
            return Err(ProjectError::DuplicateName {
                collection: self.label,
                name,
            });
        }
        self.index.insert(name, self.items.len());
        self.items.push(entity);
        Ok(())
    }

    /// Look up an entity by name.
    pub fn get_by_name(&self, name: &str) -> Option<&T> {
        self.index.get(name).map(|&i| &self.items[i])
    }

    /// Mutable lookup by name.
    ///
    /// Entities expose no way to rename themselves, so the name index stays
    /// valid.
    pub fn get_by_name_mut(&mut self, name: &str) -> Option<&mut T> {
        let index = *self.index.get(name)?;
        self.items.get_mut(index)
    }

    /// Whether an entity with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Number of entities.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the container is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The collection label used in error messages.
    pub fn label(&self) -> &'static str {
        self.label
    }
}

impl<'a, T: Entity> IntoIterator for &'a EntityContainer<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Return `name` if no entity in `entities` uses it, otherwise the first
/// free `name_N` for N = 1, 2, ...
///
/// Resolving a name that is already free returns it unchanged.
pub fn make_unique_name<T: Entity>(entities: &EntityContainer<T>, name: &str) -> String {
    if !entities.contains(name) {
        return name.to_string();
    }
    let mut counter = 1usize;
    loop {
        let candidate = format!("{name}_{counter}");
        if !entities.contains(&candidate) {
            return candidate;
        }
        counter += 1;
    }
}
