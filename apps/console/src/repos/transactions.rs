//! Transaction repository functions for domain layer (generic over DocumentStore).
//!
//! Transactions are read-only in the console: there is deliberately no
//! delete operation at this layer or above.

use serde::Serialize;

use crate::errors::domain::DomainError;
use crate::store::{Collection, Document, DocumentStore};

/// Payment transaction domain model
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transaction {
    pub id: String,
    pub user_id: Option<String>,
    pub amount: Option<f64>,
    pub status: Option<String>,
    /// Transaction type as recorded by the payment flow (e.g. "deposit").
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Creation time as epoch seconds.
    pub created_at: Option<i64>,
}

/// List every transaction document, in store order.
pub async fn list_transactions<S: DocumentStore + ?Sized>(
    store: &S,
) -> Result<Vec<Transaction>, DomainError> {
    let docs = store.list_documents(Collection::Transactions).await?;
    Ok(docs.into_iter().map(Transaction::from).collect())
}

impl From<Document> for Transaction {
    fn from(doc: Document) -> Self {
        Self {
            user_id: doc.str_field("userId"),
            amount: doc.f64_field("amount"),
            status: doc.str_field("status"),
            kind: doc.str_field("type"),
            created_at: doc.epoch_seconds_field("createdAt"),
            id: doc.id,
        }
    }
}
