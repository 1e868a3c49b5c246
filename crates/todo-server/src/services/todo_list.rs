//! Todo list service
//!
//! Reads are answered from the cache. Writes go to SQLite first and to the
//! cache second, under the same lock, so between requests the cache and the
//! table always hold the same items. A failed store write leaves the cache
//! untouched.

use crate::models::Todo;
use crate::storage::{TodoCache, TodoDatabase};
use lapak_core::{LapakError, Result};
use tokio::sync::Mutex;
use tracing::{debug, info};

struct TodoState {
    db: TodoDatabase,
    cache: TodoCache,
}

pub struct TodoList {
    state: Mutex<TodoState>,
}

impl TodoList {
    /// Mirror the whole table into the cache.
    pub async fn load(db: TodoDatabase) -> Result<Self> {
        let cache = TodoCache::from_rows(db.load_all().await?);
        info!("Loaded {} todos into cache", cache.len());

        Ok(Self {
            state: Mutex::new(TodoState { db, cache }),
        })
    }

    pub async fn list(&self) -> Vec<Todo> {
        let state = self.state.lock().await;
        state.cache.list()
    }

    pub async fn add(&self, text: &str) -> Result<Todo> {
        let mut state = self.state.lock().await;

        let todo = state.db.insert(text).await?;
        state.cache.put(todo.clone());

        info!("Todo {} created", todo.id);
        Ok(todo)
    }

    pub async fn toggle(&self, id: i64) -> Result<Todo> {
        let mut state = self.state.lock().await;

        let mut todo = state
            .cache
            .get(id)
            .cloned()
            .ok_or_else(|| LapakError::NotFound(format!("todo {} not found", id)))?;
        todo.completed = !todo.completed;

        state.db.set_completed(id, todo.completed).await?;
        state.cache.put(todo.clone());

        debug!("Todo {} completed={}", id, todo.completed);
        Ok(todo)
    }

    /// Deleting an unknown id is a no-op.
    pub async fn delete(&self, id: i64) -> Result<()> {
        let mut state = self.state.lock().await;

        let removed = state.db.delete(id).await?;
        state.cache.remove(id);

        debug!("Delete todo {}: {} row(s) removed", id, removed);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn open_temp() -> (TempDir, TodoList) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("todos.db");
        let db = TodoDatabase::open(path.to_str().unwrap()).await.unwrap();
        (dir, TodoList::load(db).await.unwrap())
    }

    async fn assert_in_sync(list: &TodoList) {
        let state = list.state.lock().await;
        let stored = state.db.load_all().await.unwrap();
        assert_eq!(state.cache.list(), stored);
    }

    #[tokio::test]
    async fn test_load_mirrors_existing_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("todos.db");
        let path = path.to_str().unwrap();

        let db = TodoDatabase::open(path).await.unwrap();
        db.insert("satu").await.unwrap();
        let two = db.insert("dua").await.unwrap();
        db.set_completed(two.id, true).await.unwrap();
        drop(db);

        let list = TodoList::load(TodoDatabase::open(path).await.unwrap())
            .await
            .unwrap();
        let items = list.list().await;
        assert_eq!(items.len(), 2);
        assert!(items[1].completed);
        assert_in_sync(&list).await;
    }

    #[tokio::test]
    async fn test_add_then_list() {
        let (_dir, list) = open_temp().await;

        let a = list.add("beli beras").await.unwrap();
        let b = list.add("  ").await.unwrap();
        assert!(b.id > a.id);
        assert_eq!(list.list().await, vec![a, b]);
        assert_in_sync(&list).await;
    }

    #[tokio::test]
    async fn test_toggle_twice_restores() {
        let (_dir, list) = open_temp().await;
        let todo = list.add("setrika baju").await.unwrap();

        let once = list.toggle(todo.id).await.unwrap();
        assert!(once.completed);
        assert_in_sync(&list).await;

        let twice = list.toggle(todo.id).await.unwrap();
        assert_eq!(twice, todo);
        assert_in_sync(&list).await;
    }

    #[tokio::test]
    async fn test_toggle_unknown_is_not_found() {
        let (_dir, list) = open_temp().await;
        assert!(matches!(
            list.toggle(404).await,
            Err(LapakError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_delete_twice() {
        let (_dir, list) = open_temp().await;
        let keep = list.add("tetap").await.unwrap();
        let gone = list.add("hapus").await.unwrap();

        list.delete(gone.id).await.unwrap();
        list.delete(gone.id).await.unwrap();
        list.delete(12345).await.unwrap();

        assert_eq!(list.list().await, vec![keep]);
        assert_in_sync(&list).await;
    }

    #[tokio::test]
    async fn test_mixed_sequence_stays_in_sync() {
        let (_dir, list) = open_temp().await;

        let mut ids = Vec::new();
        for i in 0..10 {
            ids.push(list.add(&format!("tugas {i}")).await.unwrap().id);
        }
        for id in ids.iter().step_by(2) {
            list.toggle(*id).await.unwrap();
        }
        for id in ids.iter().step_by(3) {
            list.delete(*id).await.unwrap();
        }
        list.toggle(ids[1]).await.unwrap();

        assert_in_sync(&list).await;
        assert_eq!(list.list().await.len(), 6);
    }

    #[tokio::test]
    async fn test_failed_store_write_leaves_cache_untouched() {
        let (_dir, list) = open_temp().await;
        let todo = list.add("siram tanaman").await.unwrap();

        {
            let state = list.state.lock().await;
            sqlx::query("DROP TABLE todos")
                .execute(state.db.pool())
                .await
                .unwrap();
        }

        assert!(matches!(
            list.toggle(todo.id).await,
            Err(LapakError::Database(_))
        ));
        assert!(matches!(
            list.add("tidak tersimpan").await,
            Err(LapakError::Database(_))
        ));
        assert!(matches!(
            list.delete(todo.id).await,
            Err(LapakError::Database(_))
        ));

        assert_eq!(list.list().await, vec![todo]);
    }
}
