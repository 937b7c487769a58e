//! Use Cases
//!
//! Application-specific business rules.
//! Each use case is a single-purpose struct with an execute() method.

pub mod cash_cards;

pub use cash_cards::{
    CreateCashCardUseCase, DeleteCashCardUseCase, GetCashCardByIdUseCase, ListCashCardsUseCase,
    UpdateCashCardUseCase,
};
