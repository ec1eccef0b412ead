//! Ordered lists of identified rows.

use serde::{Deserialize, Serialize};

use crate::ItemId;

/// A row that can live in a `RecordList`.
pub trait Record {
    fn id(&self) -> ItemId;
}

/// A row whose cells are addressed by a field enum and edited as text.
pub trait FieldRecord: Record {
    type Field: Copy + Eq;

    /// Current text of a cell. `None` when the field does not apply to this row.
    fn field(&self, field: Self::Field) -> Option<&str>;

    /// Replace a cell. Returns false when the field does not apply or the
    /// value is not one of the allowed choices.
    fn set_field(&mut self, field: Self::Field, value: &str) -> bool;
}

/// Direction for adjacent-swap reordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveDirection {
    Up,
    Down,
}

/// Ordered list of records addressed by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordList<T> {
    items: Vec<T>,
}

impl<T> Default for RecordList<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> From<Vec<T>> for RecordList<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> RecordList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }
}

impl<T: Record> RecordList<T> {
    pub fn position(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    pub fn find(&self, id: ItemId) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Apply `f` to the record with the given id. Returns whether a record matched.
    pub fn update(&mut self, id: ItemId, f: impl FnOnce(&mut T)) -> bool {
        match self.items.iter_mut().find(|item| item.id() == id) {
            Some(item) => {
                f(item);
                true
            }
            None => false,
        }
    }

    /// Remove the record with the given id. Returns whether a record was removed.
    pub fn remove(&mut self, id: ItemId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id() != id);
        self.items.len() != before
    }

    /// Swap a record with its neighbour. Moving past either end is a no-op.
    pub fn move_item(&mut self, id: ItemId, direction: MoveDirection) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };
        let swap_with = match direction {
            MoveDirection::Up if index > 0 => index - 1,
            MoveDirection::Down if index + 1 < self.items.len() => index + 1,
            _ => return false,
        };
        self.items.swap(index, swap_with);
        true
    }

    pub fn max_id(&self) -> Option<ItemId> {
        self.items.iter().map(Record::id).max()
    }
}

impl<'a, T> IntoIterator for &'a RecordList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
