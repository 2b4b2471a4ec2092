//! Dashboard view assembly.

use serde::Serialize;

use crate::notify::{ConfirmPrompt, Notifier};
use crate::services::dashboard::{AdminDashboard, CollectionState};
use crate::store::DocumentStore;
use crate::view::tables::{games_table, players_table, transactions_table, TableView};

/// One dashboard section: its table when settled, or a distinct error
/// message when that collection's fetch failed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum SectionView {
    Table(TableView),
    Error(String),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    /// True while any fetch is outstanding.
    pub loading: bool,
    pub players: SectionView,
    pub games: SectionView,
    pub transactions: SectionView,
}

pub fn dashboard_view<S, N, P>(dashboard: &AdminDashboard<S, N, P>) -> DashboardView
where
    S: DocumentStore,
    N: Notifier,
    P: ConfirmPrompt,
{
    DashboardView {
        loading: dashboard.is_loading(),
        players: section(dashboard.players(), players_table),
        games: section(dashboard.games(), games_table),
        transactions: section(dashboard.transactions(), transactions_table),
    }
}

// Not-yet-loaded collections render as empty tables, matching the original
// markup which always draws all three tables.
fn section<T>(state: &CollectionState<T>, project: impl Fn(&[T]) -> TableView) -> SectionView {
    match state {
        CollectionState::Failed(message) => SectionView::Error(message.clone()),
        other => SectionView::Table(project(other.rows())),
    }
}
