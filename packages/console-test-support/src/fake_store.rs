//! In-memory fake of the remote document store.
//!
//! Seedable per collection, with per-operation failure injection and a log
//! of every delete issued, so tests can assert on remote calls.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::Value;

use console::errors::domain::{DomainError, InfraErrorKind};
use console::store::{Collection, Document, DocumentStore};

#[derive(Default)]
struct Inner {
    collections: HashMap<Collection, Vec<Document>>,
    fail_list: HashSet<Collection>,
    fail_delete: HashSet<Collection>,
    deletes: Vec<(Collection, String)>,
}

/// Fake [`DocumentStore`]. Wrap in an `Arc` to keep a handle for assertions
/// after handing it to a dashboard.
#[derive(Default)]
pub struct FakeStore {
    inner: Mutex<Inner>,
}

impl FakeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed one document into a collection, preserving insertion order.
    pub fn insert(&self, collection: Collection, id: &str, fields: Value) {
        let mut inner = self.inner.lock();
        inner
            .collections
            .entry(collection)
            .or_default()
            .push(Document::from_value(id, fields));
    }

    /// Make every subsequent list of `collection` fail.
    pub fn fail_list_on(&self, collection: Collection) {
        self.inner.lock().fail_list.insert(collection);
    }

    /// Make every subsequent delete in `collection` fail.
    pub fn fail_delete_on(&self, collection: Collection) {
        self.inner.lock().fail_delete.insert(collection);
    }

    /// Every delete issued so far, in order.
    pub fn deletes(&self) -> Vec<(Collection, String)> {
        self.inner.lock().deletes.clone()
    }

    /// Documents currently held for `collection`.
    pub fn documents(&self, collection: Collection) -> Vec<Document> {
        self.inner
            .lock()
            .collections
            .get(&collection)
            .cloned()
            .unwrap_or_default()
    }
}

#[async_trait]
impl DocumentStore for FakeStore {
    async fn list_documents(&self, collection: Collection) -> Result<Vec<Document>, DomainError> {
        let inner = self.inner.lock();
        if inner.fail_list.contains(&collection) {
            return Err(DomainError::infra(
                InfraErrorKind::StoreUnavailable,
                format!("injected list failure for {}", collection.name()),
            ));
        }
        Ok(inner
            .collections
            .get(&collection)
            .cloned()
            .unwrap_or_default())
    }

    async fn delete_document(&self, collection: Collection, id: &str) -> Result<(), DomainError> {
        let mut inner = self.inner.lock();
        inner.deletes.push((collection, id.to_string()));
        if inner.fail_delete.contains(&collection) {
            return Err(DomainError::infra(
                InfraErrorKind::StoreUnavailable,
                format!("injected delete failure for {}", collection.name()),
            ));
        }
        if let Some(docs) = inner.collections.get_mut(&collection) {
            docs.retain(|d| d.id != id);
        }
        Ok(())
    }
}
