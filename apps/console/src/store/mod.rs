//! Remote document store boundary.
//!
//! The console never talks to a concrete backend directly. It goes through
//! the [`DocumentStore`] trait so a host application can plug in its real
//! client and tests can plug in a fake.

mod document;

use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::domain::DomainError;

pub use document::Document;

/// Named collections the console reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Users,
    Games,
    Transactions,
}

impl Collection {
    /// Remote collection name as addressed in the store.
    pub fn name(self) -> &'static str {
        match self {
            Collection::Users => "users",
            Collection::Games => "games",
            Collection::Transactions => "transactions",
        }
    }
}

/// Async access to the remote document store.
///
/// Implementations return every document in a collection as an ordered
/// sequence, and delete single documents by store-assigned identifier.
/// Both operations map backend failures into [`DomainError::Infra`].
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// List all documents in `collection`, in store order.
    async fn list_documents(&self, collection: Collection) -> Result<Vec<Document>, DomainError>;

    /// Delete the document with the given identifier from `collection`.
    async fn delete_document(&self, collection: Collection, id: &str) -> Result<(), DomainError>;
}

// Lets callers share one store handle between the console and their own code.
#[async_trait]
impl<S: DocumentStore + ?Sized> DocumentStore for Arc<S> {
    async fn list_documents(&self, collection: Collection) -> Result<Vec<Document>, DomainError> {
        (**self).list_documents(collection).await
    }

    async fn delete_document(&self, collection: Collection, id: &str) -> Result<(), DomainError> {
        (**self).delete_document(collection, id).await
    }
}
