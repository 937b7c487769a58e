//! Cash Card Use Cases
//!
//! Business logic for the owner-scoped cash card operations.

mod create_cash_card;
mod delete_cash_card;
mod get_cash_card_by_id;
mod list_cash_cards;
mod update_cash_card;

pub use create_cash_card::CreateCashCardUseCase;
pub use delete_cash_card::DeleteCashCardUseCase;
pub use get_cash_card_by_id::GetCashCardByIdUseCase;
pub use list_cash_cards::ListCashCardsUseCase;
pub use update_cash_card::UpdateCashCardUseCase;
