//! REST API Module
//!
//! Contains HTTP handlers, DTOs, and middleware for the REST API.

pub mod dto;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use crate::application::use_cases::cash_cards::{
    CreateCashCardUseCase, DeleteCashCardUseCase, GetCashCardByIdUseCase, ListCashCardsUseCase,
    UpdateCashCardUseCase,
};
use crate::domain::gateways::UserRepository;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub user_repository: Arc<dyn UserRepository>,
    pub create_cash_card_use_case: Arc<CreateCashCardUseCase>,
    pub get_cash_card_by_id_use_case: Arc<GetCashCardByIdUseCase>,
    pub list_cash_cards_use_case: Arc<ListCashCardsUseCase>,
    pub update_cash_card_use_case: Arc<UpdateCashCardUseCase>,
    pub delete_cash_card_use_case: Arc<DeleteCashCardUseCase>,
}
