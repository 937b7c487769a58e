//! Delete Cash Card Use Case
//!
//! Removes a card the principal owns.

use std::sync::Arc;

use crate::domain::gateways::CashCardRepository;
use crate::domain::models::cash_card::CashCardId;
use crate::shared::errors::UseCaseError;

/// Use case for deleting a cash card
pub struct DeleteCashCardUseCase {
    cash_card_repository: Arc<dyn CashCardRepository>,
}

impl DeleteCashCardUseCase {
    /// Create a new DeleteCashCardUseCase
    #[must_use]
    pub fn new(cash_card_repository: Arc<dyn CashCardRepository>) -> Self {
        Self {
            cash_card_repository,
        }
    }

    /// Execute the use case
    ///
    /// The card is looked up scoped to the principal first, so a card owned
    /// by someone else is reported as absent and left intact.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if no card matches `(id, owner)`.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, id: &CashCardId, owner: &str) -> Result<(), UseCaseError> {
        tracing::info!(cash_card_id = %id, owner = %owner, "Deleting cash card");

        let card = self
            .cash_card_repository
            .find_by_id_and_owner(id, owner)
            .await?
            .ok_or_else(|| {
                tracing::debug!(cash_card_id = %id, owner = %owner, "Cash card not found for deletion");
                UseCaseError::NotFound {
                    resource: "CashCard".to_string(),
                    id: id.to_string(),
                }
            })?;

        self.cash_card_repository.delete(&card).await?;

        tracing::info!(cash_card_id = %id, "Cash card deleted successfully");
        Ok(())
    }
}
