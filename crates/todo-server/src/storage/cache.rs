//! In-memory mirror of the todo table

use crate::models::Todo;
use std::collections::BTreeMap;

/// Unbounded map from todo id to todo, holding every row of the table.
///
/// The cache does no locking of its own; the owner serializes access.
#[derive(Debug, Default)]
pub struct TodoCache {
    items: BTreeMap<i64, Todo>,
}

impl TodoCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the mirror from a full table scan
    pub fn from_rows(rows: Vec<Todo>) -> Self {
        Self {
            items: rows.into_iter().map(|todo| (todo.id, todo)).collect(),
        }
    }

    pub fn get(&self, id: i64) -> Option<&Todo> {
        self.items.get(&id)
    }

    /// Insert or replace the entry for `todo.id`
    pub fn put(&mut self, todo: Todo) {
        self.items.insert(todo.id, todo);
    }

    pub fn remove(&mut self, id: i64) -> Option<Todo> {
        self.items.remove(&id)
    }

    /// Every item, ascending by id
    pub fn list(&self) -> Vec<Todo> {
        self.items.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo(id: i64, text: &str) -> Todo {
        Todo {
            id,
            text: text.to_string(),
            completed: false,
        }
    }

    #[test]
    fn test_basic_operations() {
        let mut cache = TodoCache::new();
        assert!(cache.is_empty());

        cache.put(todo(1, "a"));
        assert_eq!(cache.get(1), Some(&todo(1, "a")));
        assert_eq!(cache.get(2), None);

        let mut done = todo(1, "a");
        done.completed = true;
        cache.put(done.clone());
        assert_eq!(cache.get(1), Some(&done));
        assert_eq!(cache.len(), 1);

        assert_eq!(cache.remove(1), Some(done));
        assert_eq!(cache.remove(1), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_list_is_ordered_by_id() {
        let cache = TodoCache::from_rows(vec![todo(7, "c"), todo(2, "a"), todo(4, "b")]);
        let ids: Vec<i64> = cache.list().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 4, 7]);
    }
}
