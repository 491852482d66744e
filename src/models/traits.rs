//! Trait definitions for domain models
//!
//! Doctors and patients are identified solely by their numeric id. Rather
//! than overloading `PartialEq`/`Ord` on the entities, the id is exposed as
//! an explicit key so call sites that sort or de-duplicate say so.

use std::fmt::Debug;
use std::hash::Hash;

/// A trait that all identifiable domain models implement.
pub trait Entity: Clone + Debug {
    /// The type of identifier used for this model
    type Id: Copy + Eq + Ord + Hash + Debug;

    /// Get the unique identifier for this model
    fn id(&self) -> Self::Id;

    /// Human-readable name of the entity
    fn name(&self) -> &str;
}
