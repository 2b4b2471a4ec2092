//! Admin dashboard service.
//!
//! Holds the session-scoped copies of the three remote collections and
//! drives the load and delete flows. All collaborators (store, toast
//! surface, confirmation prompt) are injected.

use crate::error::AppError;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::notify::{ConfirmPrompt, Notifier};
use crate::repos::games::{self, Game};
use crate::repos::players::{self, Player};
use crate::repos::transactions::{self, Transaction};
use crate::store::{Collection, DocumentStore};

pub const CONFIRM_DELETE_PLAYER: &str = "Are you sure you want to delete this player?";
pub const CONFIRM_DELETE_GAME: &str = "Are you sure you want to delete this game?";

/// Load state of one collection. Fetched collections settle independently,
/// so one failing does not hide the others.
#[derive(Debug, Clone, PartialEq)]
pub enum CollectionState<T> {
    NotLoaded,
    Loaded(Vec<T>),
    Failed(String),
}

impl<T> CollectionState<T> {
    /// Rows when loaded, empty otherwise.
    pub fn rows(&self) -> &[T] {
        match self {
            CollectionState::Loaded(rows) => rows,
            _ => &[],
        }
    }
}

/// Result of a confirmed-delete flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Remote delete acknowledged and the local row dropped.
    Deleted,
    /// Operator declined the confirmation; nothing was issued.
    Cancelled,
}

/// Admin dashboard over the three remote collections.
pub struct AdminDashboard<S, N, P> {
    store: S,
    notifier: N,
    prompt: P,
    loading: bool,
    players: CollectionState<Player>,
    games: CollectionState<Game>,
    transactions: CollectionState<Transaction>,
}

impl<S, N, P> AdminDashboard<S, N, P>
where
    S: DocumentStore,
    N: Notifier,
    P: ConfirmPrompt,
{
    pub fn new(store: S, notifier: N, prompt: P) -> Self {
        Self {
            store,
            notifier,
            prompt,
            loading: false,
            players: CollectionState::NotLoaded,
            games: CollectionState::NotLoaded,
            transactions: CollectionState::NotLoaded,
        }
    }

    /// Fetch all three collections and settle each independently.
    ///
    /// The fetches are issued concurrently; completion order does not matter.
    /// The loading indicator stays up until all three have settled. A failed
    /// collection surfaces as [`CollectionState::Failed`] plus an error
    /// notification while the others stay visible.
    pub async fn load(&mut self) {
        self.loading = true;

        let (players, games, transactions) = futures::join!(
            players::list_players(&self.store),
            games::list_games(&self.store),
            transactions::list_transactions(&self.store),
        );

        self.players = self.settle(Collection::Users, players);
        self.games = self.settle(Collection::Games, games);
        self.transactions = self.settle(Collection::Transactions, transactions);

        self.loading = false;
    }

    fn settle<T>(
        &self,
        collection: Collection,
        result: Result<Vec<T>, DomainError>,
    ) -> CollectionState<T> {
        match result {
            Ok(rows) => {
                tracing::debug!(
                    collection = collection.name(),
                    count = rows.len(),
                    "collection loaded"
                );
                CollectionState::Loaded(rows)
            }
            Err(err) => {
                tracing::warn!(
                    collection = collection.name(),
                    error = %err,
                    "collection load failed"
                );
                let message = format!("Failed to load {}", collection.name());
                self.notifier.error(&message);
                CollectionState::Failed(message)
            }
        }
    }

    /// Delete a player after interactive confirmation.
    ///
    /// The remote delete is awaited before the local row is dropped; on a
    /// remote failure the list is left untouched and an error notification
    /// fires. The id must reference a currently loaded row.
    pub async fn delete_player(&mut self, id: &str) -> Result<DeleteOutcome, AppError> {
        if !self.players.rows().iter().any(|p| p.id == id) {
            return Err(DomainError::not_found(
                NotFoundKind::Player,
                format!("no loaded player with id {id}"),
            )
            .into());
        }
        if !self.prompt.confirm(CONFIRM_DELETE_PLAYER) {
            return Ok(DeleteOutcome::Cancelled);
        }

        if let Err(err) = players::delete_player(&self.store, id).await {
            tracing::warn!(player_id = id, error = %err, "player delete failed");
            self.notifier.error("Failed to delete player");
            return Err(err.into());
        }

        if let CollectionState::Loaded(rows) = &mut self.players {
            rows.retain(|p| p.id != id);
        }
        self.notifier.success("Player deleted");
        Ok(DeleteOutcome::Deleted)
    }

    /// Delete a game after interactive confirmation. Same contract as
    /// [`Self::delete_player`], for the games collection.
    pub async fn delete_game(&mut self, id: &str) -> Result<DeleteOutcome, AppError> {
        if !self.games.rows().iter().any(|g| g.id == id) {
            return Err(DomainError::not_found(
                NotFoundKind::Game,
                format!("no loaded game with id {id}"),
            )
            .into());
        }
        if !self.prompt.confirm(CONFIRM_DELETE_GAME) {
            return Ok(DeleteOutcome::Cancelled);
        }

        if let Err(err) = games::delete_game(&self.store, id).await {
            tracing::warn!(game_id = id, error = %err, "game delete failed");
            self.notifier.error("Failed to delete game");
            return Err(err.into());
        }

        if let CollectionState::Loaded(rows) = &mut self.games {
            rows.retain(|g| g.id != id);
        }
        self.notifier.success("Game deleted");
        Ok(DeleteOutcome::Deleted)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn players(&self) -> &CollectionState<Player> {
        &self.players
    }

    pub fn games(&self) -> &CollectionState<Game> {
        &self.games
    }

    pub fn transactions(&self) -> &CollectionState<Transaction> {
        &self.transactions
    }
}
