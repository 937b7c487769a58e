//! List Cash Cards Use Case
//!
//! Retrieves one page of the principal's cash cards.

use std::sync::Arc;

use crate::domain::gateways::CashCardRepository;
use crate::domain::models::cash_card::CashCard;
use crate::domain::models::page::PageSpec;
use crate::shared::errors::UseCaseError;

/// Use case for listing a principal's cash cards
pub struct ListCashCardsUseCase {
    cash_card_repository: Arc<dyn CashCardRepository>,
}

impl ListCashCardsUseCase {
    /// Create a new ListCashCardsUseCase
    #[must_use]
    pub fn new(cash_card_repository: Arc<dyn CashCardRepository>) -> Self {
        Self {
            cash_card_repository,
        }
    }

    /// Execute the use case
    ///
    /// Only cards owned by `owner` are returned, in the order the page spec
    /// requests. An owner with no cards gets an empty page, not an error.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(
        &self,
        owner: &str,
        page: &PageSpec,
    ) -> Result<Vec<CashCard>, UseCaseError> {
        tracing::debug!(owner = %owner, page = page.page(), size = page.size(), "Listing cash cards");

        let cards = self.cash_card_repository.find_by_owner(owner, page).await?;

        tracing::debug!(owner = %owner, count = cards.len(), "Found cash cards");
        Ok(cards)
    }
}
