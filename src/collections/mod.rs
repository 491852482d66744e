//! Standardized model collections
//!
//! Collections owned by the hospital aggregate: an insertion-ordered
//! entity collection for doctors and patients, the authoritative visit store
//! with its admissions index, and the daily attendance log.

pub mod attendance;
pub mod visits;

pub use attendance::{AttendanceLog, Roster};
pub use visits::{AdmissionsLog, VisitStore};

use rustc_hash::FxHashMap;

use crate::models::Entity;

/// A trait for collections of models that can be queried and modified.
pub trait ModelCollection<T: Entity> {
    /// Add a model to the collection
    fn add(&mut self, model: T);

    /// Get a model by its identifier
    fn get(&self, id: T::Id) -> Option<&T>;

    /// Get all models in the collection
    fn all(&self) -> &[T];

    /// Filter models by a predicate function
    fn filter<F>(&self, predicate: F) -> Vec<&T>
    where
        F: Fn(&T) -> bool;

    /// Count the total number of models in the collection
    fn count(&self) -> usize;
}

/// Entities kept in insertion order with an id index
///
/// Adding never de-duplicates. When two entities share an id, lookups by id
/// resolve to the one added first.
#[derive(Debug, Clone)]
pub struct EntityCollection<T: Entity> {
    items: Vec<T>,
    index: FxHashMap<T::Id, usize>,
}

impl<T: Entity> EntityCollection<T> {
    /// Create a new empty collection
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            index: FxHashMap::default(),
        }
    }

    /// Create a collection from a vector of models
    #[must_use]
    pub fn from_models(models: Vec<T>) -> Self {
        let mut collection = Self::new();
        for model in models {
            collection.add(model);
        }
        collection
    }

    /// Whether an entity with `id` is present
    #[must_use]
    pub fn contains(&self, id: T::Id) -> bool {
        self.index.contains_key(&id)
    }

    /// Mutable access by id
    pub fn get_mut(&mut self, id: T::Id) -> Option<&mut T> {
        let position = *self.index.get(&id)?;
        self.items.get_mut(position)
    }

    /// First entity with the given name
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&T> {
        self.items.iter().find(|item| item.name() == name)
    }

    /// First entity with the given name, mutably
    pub fn find_by_name_mut(&mut self, name: &str) -> Option<&mut T> {
        self.items.iter_mut().find(|item| item.name() == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: Entity> Default for EntityCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> ModelCollection<T> for EntityCollection<T> {
    fn add(&mut self, model: T) {
        self.index.entry(model.id()).or_insert(self.items.len());
        self.items.push(model);
    }

    fn get(&self, id: T::Id) -> Option<&T> {
        self.index.get(&id).map(|&position| &self.items[position])
    }

    fn all(&self) -> &[T] {
        &self.items
    }

    fn filter<F>(&self, predicate: F) -> Vec<&T>
    where
        F: Fn(&T) -> bool,
    {
        self.items.iter().filter(|model| predicate(model)).collect()
    }

    fn count(&self) -> usize {
        self.items.len()
    }
}

impl<'a, T: Entity> IntoIterator for &'a EntityCollection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
