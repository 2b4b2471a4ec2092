//! Game repository functions for domain layer (generic over DocumentStore).

use serde::Serialize;

use crate::errors::domain::DomainError;
use crate::store::{Collection, Document, DocumentStore};

/// Game domain model
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Game {
    pub id: String,
    pub name: Option<String>,
    pub status: Option<String>,
}

/// List every game document, in store order.
pub async fn list_games<S: DocumentStore + ?Sized>(store: &S) -> Result<Vec<Game>, DomainError> {
    let docs = store.list_documents(Collection::Games).await?;
    Ok(docs.into_iter().map(Game::from).collect())
}

/// Delete a game document by store-assigned identifier.
pub async fn delete_game<S: DocumentStore + ?Sized>(
    store: &S,
    id: &str,
) -> Result<(), DomainError> {
    store.delete_document(Collection::Games, id).await
}

impl From<Document> for Game {
    fn from(doc: Document) -> Self {
        Self {
            name: doc.str_field("name"),
            status: doc.str_field("status"),
            id: doc.id,
        }
    }
}
