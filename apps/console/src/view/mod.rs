//! Headless view projections.
//!
//! These build plain serializable structures from component state; the host
//! UI turns them into actual widgets.

pub mod dashboard;
pub mod onboarding;
pub mod tables;

pub use dashboard::{dashboard_view, DashboardView, SectionView};
pub use onboarding::{onboarding_view, OnboardingView};
pub use tables::{games_table, players_table, transactions_table, TableView, PLACEHOLDER};
