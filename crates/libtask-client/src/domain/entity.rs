//! Core Entity Trait
//!
//! Every record the backend hands out is keyed by an opaque string id.

/// Core trait for all domain entities
pub trait Entity: Clone {
    /// Returns the entity's unique identifier
    fn id(&self) -> &str;
}

/// Replace the entity with the same id, or append it when absent.
pub fn upsert<T: Entity>(items: &mut Vec<T>, entity: T) {
    match items.iter_mut().find(|existing| existing.id() == entity.id()) {
        Some(existing) => *existing = entity,
        None => items.push(entity),
    }
}

/// Find an entity by id
pub fn find_by_id<'a, T: Entity>(items: &'a [T], id: &str) -> Option<&'a T> {
    items.iter().find(|item| item.id() == id)
}
