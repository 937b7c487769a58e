//! Driven Adapters
//!
//! Implementations of gateway traits for external systems:
//! - Database repositories
//! - Configuration

pub mod cash_card_repository;
pub mod config;
pub mod database;
pub mod user_repository;

pub use cash_card_repository::PostgresCashCardRepository;
pub use config::AppConfig;
pub use user_repository::PostgresUserRepository;
