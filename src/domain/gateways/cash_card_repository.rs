//! Cash Card Repository Gateway
//!
//! Abstract trait defining the contract for cash card persistence operations.

use async_trait::async_trait;

use crate::domain::models::cash_card::{CashCard, CashCardId};
use crate::domain::models::page::PageSpec;
use crate::shared::errors::RepositoryError;

/// Repository trait for cash card persistence operations
///
/// Absence is reported as `Ok(None)` (or `Ok(false)` for delete), never as an
/// error; the not-found decision belongs to the use cases.
#[async_trait]
pub trait CashCardRepository: Send + Sync {
    /// Find a cash card by its id, regardless of owner
    async fn find_by_id(&self, id: &CashCardId) -> Result<Option<CashCard>, RepositoryError>;

    /// Find a cash card by its id, filtered to the given owner
    async fn find_by_id_and_owner(
        &self,
        id: &CashCardId,
        owner: &str,
    ) -> Result<Option<CashCard>, RepositoryError>;

    /// Find one page of the owner's cards, ordered per the page spec
    async fn find_by_owner(
        &self,
        owner: &str,
        page: &PageSpec,
    ) -> Result<Vec<CashCard>, RepositoryError>;

    /// Persist a cash card: insert (assigning an id) when the card has none,
    /// otherwise overwrite the row with that id
    async fn save(&self, card: &CashCard) -> Result<CashCard, RepositoryError>;

    /// Remove a cash card, returning whether a row was deleted
    async fn delete(&self, card: &CashCard) -> Result<bool, RepositoryError>;
}
