//! Create Cash Card Use Case
//!
//! Creates a new cash card owned by the requesting principal.

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::domain::gateways::CashCardRepository;
use crate::domain::models::cash_card::CashCard;
use crate::shared::errors::UseCaseError;

/// Use case for creating a new cash card
pub struct CreateCashCardUseCase {
    cash_card_repository: Arc<dyn CashCardRepository>,
}

impl CreateCashCardUseCase {
    /// Create a new CreateCashCardUseCase
    #[must_use]
    pub fn new(cash_card_repository: Arc<dyn CashCardRepository>) -> Self {
        Self {
            cash_card_repository,
        }
    }

    /// Execute the use case
    ///
    /// The owner is always the authenticated principal, never taken from the
    /// request body.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, amount: Decimal, owner: &str) -> Result<CashCard, UseCaseError> {
        tracing::info!(owner = %owner, "Creating new cash card");

        let card = CashCard::new(amount, owner.to_string());
        let created = self.cash_card_repository.save(&card).await?;

        tracing::info!(
            cash_card_id = ?created.id(),
            owner = %owner,
            "Cash card created successfully"
        );

        Ok(created)
    }
}
