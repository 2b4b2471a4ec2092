//! Column-per-field table projections for the three collections.

use serde::Serialize;
use time::format_description::FormatItem;
use time::macros::format_description;
use time::OffsetDateTime;

use crate::repos::games::Game;
use crate::repos::players::Player;
use crate::repos::transactions::Transaction;

/// Literal rendered for any missing optional field.
pub const PLACEHOLDER: &str = "-";

static CREATED_AT_FORMAT: &[FormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second] UTC");

/// One rendered table: a title, fixed headers, and row cells already
/// projected to display strings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableView {
    pub title: String,
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
    /// Whether each row carries a delete action.
    pub deletable: bool,
}

pub fn players_table(players: &[Player]) -> TableView {
    TableView {
        title: "Players".to_string(),
        headers: vec!["UID", "Name", "Email", "Phone", "Status"],
        rows: players
            .iter()
            .map(|p| {
                vec![
                    p.id.clone(),
                    cell(p.display_name.as_deref()),
                    cell(p.email.as_deref()),
                    cell(p.phone.as_deref()),
                    p.status.clone(),
                ]
            })
            .collect(),
        deletable: true,
    }
}

pub fn games_table(games: &[Game]) -> TableView {
    TableView {
        title: "Games".to_string(),
        headers: vec!["ID", "Name", "Status"],
        rows: games
            .iter()
            .map(|g| {
                vec![
                    g.id.clone(),
                    cell(g.name.as_deref()),
                    cell(g.status.as_deref()),
                ]
            })
            .collect(),
        deletable: true,
    }
}

pub fn transactions_table(transactions: &[Transaction]) -> TableView {
    TableView {
        title: "Payment Transactions".to_string(),
        headers: vec!["ID", "User", "Amount", "Status", "Type", "Created"],
        rows: transactions
            .iter()
            .map(|t| {
                vec![
                    t.id.clone(),
                    cell(t.user_id.as_deref()),
                    amount_cell(t.amount),
                    cell(t.status.as_deref()),
                    cell(t.kind.as_deref()),
                    created_at_cell(t.created_at),
                ]
            })
            .collect(),
        deletable: false,
    }
}

fn cell(value: Option<&str>) -> String {
    value.unwrap_or(PLACEHOLDER).to_string()
}

fn amount_cell(amount: Option<f64>) -> String {
    match amount {
        // Whole amounts render without a trailing ".0".
        Some(a) if a.fract() == 0.0 && a.abs() < 1e15 => format!("{}", a as i64),
        Some(a) => a.to_string(),
        None => PLACEHOLDER.to_string(),
    }
}

/// Epoch seconds to a display date-time; absent or out-of-range values
/// render the placeholder.
fn created_at_cell(created_at: Option<i64>) -> String {
    created_at
        .and_then(|secs| OffsetDateTime::from_unix_timestamp(secs).ok())
        .and_then(|dt| dt.format(CREATED_AT_FORMAT).ok())
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}
