//! Get Cash Card By ID Use Case
//!
//! Retrieves a single cash card by id, scoped to the requesting principal.

use std::sync::Arc;

use crate::domain::gateways::CashCardRepository;
use crate::domain::models::cash_card::{CashCard, CashCardId};
use crate::shared::errors::UseCaseError;

/// Use case for getting a cash card by id
pub struct GetCashCardByIdUseCase {
    cash_card_repository: Arc<dyn CashCardRepository>,
}

impl GetCashCardByIdUseCase {
    /// Create a new GetCashCardByIdUseCase
    #[must_use]
    pub fn new(cash_card_repository: Arc<dyn CashCardRepository>) -> Self {
        Self {
            cash_card_repository,
        }
    }

    /// Execute the use case
    ///
    /// A card owned by someone else produces the same `NotFound` as a card
    /// that does not exist.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if no card matches `(id, owner)`.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, id: &CashCardId, owner: &str) -> Result<CashCard, UseCaseError> {
        tracing::debug!(cash_card_id = %id, owner = %owner, "Getting cash card by id");

        let card = self
            .cash_card_repository
            .find_by_id_and_owner(id, owner)
            .await?
            .ok_or_else(|| {
                tracing::debug!(cash_card_id = %id, owner = %owner, "Cash card not found for owner");
                UseCaseError::NotFound {
                    resource: "CashCard".to_string(),
                    id: id.to_string(),
                }
            })?;

        tracing::debug!(cash_card_id = %id, "Cash card found");
        Ok(card)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::page::PageSpec;
    use crate::shared::errors::RepositoryError;
    use async_trait::async_trait;
    use rust_decimal_macros::dec;
    use std::sync::Mutex;

    struct MockCashCardRepository {
        find_by_id_and_owner_result: Mutex<Option<Result<Option<CashCard>, RepositoryError>>>,
    }

    impl MockCashCardRepository {
        fn new() -> Self {
            Self {
                find_by_id_and_owner_result: Mutex::new(None),
            }
        }

        fn with_find_by_id_and_owner(
            self,
            result: Result<Option<CashCard>, RepositoryError>,
        ) -> Self {
            *self.find_by_id_and_owner_result.lock().unwrap() = Some(result);
            self
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
            Ok(card.clone())
        }

        async fn delete(&self, _card: &CashCard) -> Result<bool, RepositoryError> {
            Ok(false)
        }
    }

    #[tokio::test]
    async fn should_return_card_when_owned_by_principal() {
        let card = CashCard::restore(CashCardId::from_i64(120), dec!(453.43), "jay".to_string());
        let repo = Arc::new(
            MockCashCardRepository::new().with_find_by_id_and_owner(Ok(Some(card.clone()))),
        );

        let use_case = GetCashCardByIdUseCase::new(repo);
        let result = use_case.execute(&CashCardId::from_i64(120), "jay").await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().amount(), dec!(453.43));
    }

    #[tokio::test]
    async fn should_return_not_found_when_card_does_not_exist() {
        let repo = Arc::new(MockCashCardRepository::new().with_find_by_id_and_owner(Ok(None)));

        let use_case = GetCashCardByIdUseCase::new(repo);
        let result = use_case.execute(&CashCardId::from_i64(130), "jay").await;

        assert!(matches!(
            result.unwrap_err(),
            UseCaseError::NotFound { .. }
        ));
    }
}
