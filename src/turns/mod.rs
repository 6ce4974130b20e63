//! Turn order management.

pub mod manager;

pub use manager::TurnManager;
