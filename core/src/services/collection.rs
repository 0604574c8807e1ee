//! Small transforms over lists of records

use serde_json::{Map, Value};

use crate::domain::entities::token::Payload;

/// A record that can be matched by id
pub trait Identifiable {
    type Id: PartialEq;

    fn id(&self) -> Option<&Self::Id>;
}

/// JSON records are identified by their `id` field
impl Identifiable for Map<String, Value> {
    type Id = Value;

    fn id(&self) -> Option<&Value> {
        self.get("id")
    }
}

/// Returns each item shallow-merged with `extra`, extra fields winning on conflict
///
/// The input records are left untouched and their order is preserved.
pub fn merge_fields(items: &[Payload], extra: &Payload) -> Vec<Payload> {
    items
        .iter()
        .map(|item| {
            let mut merged = item.clone();
            merged.extend(extra.iter().map(|(key, value)| (key.clone(), value.clone())));
            merged
        })
        .collect()
}

/// Whether every candidate id matches some reference item
///
/// Matching is by strict equality, so the JSON id `1` does not match `"1"`.
/// An empty candidate list is trivially satisfied.
pub fn ids_all_present<T>(candidate_ids: &[T::Id], reference_items: &[T]) -> bool
where
    T: Identifiable,
{
    candidate_ids
        .iter()
        .all(|id| reference_items.iter().any(|item| item.id() == Some(id)))
}
