//! Repository functions for the domain layer (generic over DocumentStore).

pub mod games;
pub mod players;
pub mod transactions;
