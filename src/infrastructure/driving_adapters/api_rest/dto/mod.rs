//! Data Transfer Objects
//!
//! Request and response DTOs for the REST API.

pub mod cash_card;

pub use cash_card::{
    CashCardResponseDto, CreateCashCardDto, ListCashCardsParams, UpdateCashCardDto,
};
