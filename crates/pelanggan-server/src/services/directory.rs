//! Customer directory service

use crate::models::{DataTableResponse, Pelanggan};
use crate::query::ListQuery;
use crate::storage::CustomerDatabase;
use lapak_core::Result;
use tokio::sync::Mutex;
use tracing::{debug, info};

/// Serializes every customer operation behind one lock. The store handle
/// lives inside the mutex, so it cannot be reached without holding it.
pub struct CustomerDirectory {
    store: Mutex<CustomerDatabase>,
}

impl CustomerDirectory {
    pub fn new(db: CustomerDatabase) -> Self {
        Self {
            store: Mutex::new(db),
        }
    }

    pub async fn list(&self, query: &ListQuery) -> Result<DataTableResponse> {
        let db = self.store.lock().await;
        debug!("Listing customers: {:?}", query);
        db.list_page(query).await
    }

    pub async fn add(&self, nama: &str, alamat: &str) -> Result<Pelanggan> {
        let db = self.store.lock().await;
        let pelanggan = db.insert(nama, alamat).await?;
        info!("Customer {} created", pelanggan.id);
        Ok(pelanggan)
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let db = self.store.lock().await;
        let removed = db.delete(id).await?;
        debug!("Delete customer {}: {} row(s) removed", id, removed);
        Ok(())
    }
}
