//! Update Cash Card Use Case
//!
//! Replaces the amount of a card the principal owns.

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::domain::gateways::CashCardRepository;
use crate::domain::models::cash_card::CashCardId;
use crate::shared::errors::UseCaseError;

/// Use case for updating a cash card's amount
pub struct UpdateCashCardUseCase {
    cash_card_repository: Arc<dyn CashCardRepository>,
}

impl UpdateCashCardUseCase {
    /// Create a new UpdateCashCardUseCase
    #[must_use]
    pub fn new(cash_card_repository: Arc<dyn CashCardRepository>) -> Self {
        Self {
            cash_card_repository,
        }
    }

    /// Execute the use case
    ///
    /// Ownership is re-derived from the principal before any mutation; a card
    /// owned by someone else is treated as absent and nothing is written.
    /// Id and owner are immutable, only the amount is replaced.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if no card matches `(id, owner)`.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(
        &self,
        id: &CashCardId,
        owner: &str,
        amount: Decimal,
    ) -> Result<(), UseCaseError> {
        tracing::info!(cash_card_id = %id, owner = %owner, "Updating cash card");

        let card = self
            .cash_card_repository
            .find_by_id_and_owner(id, owner)
            .await?
            .ok_or_else(|| {
                tracing::debug!(cash_card_id = %id, owner = %owner, "Cash card not found for update");
                UseCaseError::NotFound {
                    resource: "CashCard".to_string(),
                    id: id.to_string(),
                }
            })?;

        self.cash_card_repository
            .save(&card.with_amount(amount))
            .await?;

        tracing::info!(cash_card_id = %id, "Cash card updated successfully");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::cash_card::CashCard;
    use crate::domain::models::page::PageSpec;
    use crate::shared::errors::RepositoryError;
    use async_trait::async_trait;
    use rust_decimal_macros::dec;
    use std::sync::Mutex;

    struct MockCashCardRepository {
        find_by_id_and_owner_result: Mutex<Option<Result<Option<CashCard>, RepositoryError>>>,
        saved: Mutex<Option<CashCard>>,
    }

    impl MockCashCardRepository {
        fn new() -> Self {
            Self {
                find_by_id_and_owner_result: Mutex::new(None),
                saved: Mutex::new(None),
            }
        }

        fn with_find_by_id_and_owner(
            self,
            result: Result<Option<CashCard>, RepositoryError>,
        ) -> Self {
            *self.find_by_id_and_owner_result.lock().unwrap() = Some(result);
            self
        }

        fn saved_card(&self) -> Option<CashCard> {
            self.saved.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl CashCardRepository for MockCashCardRepository {
        async fn find_by_id(&self, _id: &CashCardId) -> Result<Option<CashCard>, RepositoryError> {
            Ok(None)
        }

        async fn find_by_id_and_owner(
            &self,
            _id: &CashCardId,
            _owner: &str,
        ) -> Result<Option<CashCard>, RepositoryError> {
            self.find_by_id_and_owner_result
                .lock()
                .unwrap()
                .take()
                .unwrap_or(Ok(None))
        }

        async fn find_by_owner(
            &self,
            _owner: &str,
            _page: &PageSpec,
        ) -> Result<Vec<CashCard>, RepositoryError> {
            Ok(vec![])
        }

        async fn save(&self, card: &CashCard) -> Result<CashCard, RepositoryError> {
            *self.saved.lock().unwrap() = Some(card.clone());
            Ok(card.clone())
        }

        async fn delete(&self, _card: &CashCard) -> Result<bool, RepositoryError> {
            Ok(false)
        }
    }

    #[tokio::test]
    async fn should_replace_amount_and_preserve_id_and_owner() {
        let card = CashCard::restore(CashCardId::from_i64(120), dec!(453.43), "jay".to_string());
        let repo = Arc::new(MockCashCardRepository::new().with_find_by_id_and_owner(Ok(Some(card))));

        let use_case = UpdateCashCardUseCase::new(repo.clone());
        let result = use_case
            .execute(&CashCardId::from_i64(120), "jay", dec!(19.99))
            .await;

        assert!(result.is_ok());
        let saved = repo.saved_card().unwrap();
        assert_eq!(saved.id(), Some(&CashCardId::from_i64(120)));
        assert_eq!(saved.amount(), dec!(19.99));
        assert_eq!(saved.owner(), "jay");
    }

    #[tokio::test]
    async fn should_not_write_when_card_is_not_owned() {
        let repo = Arc::new(MockCashCardRepository::new().with_find_by_id_and_owner(Ok(None)));

        let use_case = UpdateCashCardUseCase::new(repo.clone());
        let result = use_case
            .execute(&CashCardId::from_i64(102), "jay", dec!(34.56))
            .await;

        assert!(matches!(
            result.unwrap_err(),
            UseCaseError::NotFound { .. }
        ));
        assert!(repo.saved_card().is_none());
    }
}
