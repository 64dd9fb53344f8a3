//! In-process store implementation.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::store::{StoreResult, UserDocument, UserStore};

/// In-process store used by the serve command and tests.
///
/// Each `put` replaces the whole document under the id while holding the
/// write lock, matching the document store's per-document atomicity.
#[derive(Default)]
pub struct MemoryStore {
    documents: RwLock<HashMap<String, UserDocument>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn get(&self, id: &str) -> StoreResult<Option<UserDocument>> {
        Ok(self.documents.read().await.get(id).cloned())
    }

    async fn put(&self, id: &str, document: UserDocument) -> StoreResult<()> {
        self.documents.write().await.insert(id.to_string(), document);
        Ok(())
    }
}
