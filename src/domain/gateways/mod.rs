//! Gateway Traits (Ports)
//!
//! Abstract interfaces defining contracts for external dependencies.
//! These are implemented by driven adapters in the infrastructure layer.

pub mod cash_card_repository;
pub mod user_repository;

pub use cash_card_repository::CashCardRepository;
pub use user_repository::UserRepository;
