//! Player repository functions for domain layer (generic over DocumentStore).

use serde::Serialize;

use crate::errors::domain::DomainError;
use crate::store::{Collection, Document, DocumentStore};

/// Default status applied when the remote document carries none.
pub const DEFAULT_STATUS: &str = "active";

/// Player domain model
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Player {
    pub id: String,
    pub display_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub status: String,
}

// Free functions (generic) over the injected store handle

/// List every player document in the `users` collection, in store order.
pub async fn list_players<S: DocumentStore + ?Sized>(
    store: &S,
) -> Result<Vec<Player>, DomainError> {
    let docs = store.list_documents(Collection::Users).await?;
    Ok(docs.into_iter().map(Player::from).collect())
}

/// Delete a player document by store-assigned identifier.
pub async fn delete_player<S: DocumentStore + ?Sized>(
    store: &S,
    id: &str,
) -> Result<(), DomainError> {
    store.delete_document(Collection::Users, id).await
}

// Conversion from the schemaless document, validating/defaulting at the boundary

impl From<Document> for Player {
    fn from(doc: Document) -> Self {
        Self {
            display_name: doc.str_field("displayName"),
            email: doc.str_field("email"),
            phone: doc.str_field("phone"),
            status: doc
                .str_field("status")
                .unwrap_or_else(|| DEFAULT_STATUS.to_string()),
            id: doc.id,
        }
    }
}
