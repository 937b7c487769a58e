//! PostgreSQL Cash Card Repository Implementation
//!
//! Implements the CashCardRepository trait using SQLx for PostgreSQL.

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::domain::gateways::CashCardRepository;
use crate::domain::models::cash_card::{CashCard, CashCardId};
use crate::domain::models::page::PageSpec;
use crate::shared::errors::RepositoryError;

/// Database row representation for the cash_cards table
#[derive(Debug, sqlx::FromRow)]
struct CashCardRow {
    id: i64,
    amount: Decimal,
    owner: String,
}

impl From<CashCardRow> for CashCard {
    fn from(row: CashCardRow) -> Self {
        CashCard::restore(CashCardId::from_i64(row.id), row.amount, row.owner)
    }
}

/// PostgreSQL implementation of CashCardRepository
pub struct PostgresCashCardRepository {
    pool: PgPool,
}

impl PostgresCashCardRepository {
    /// Create a new PostgresCashCardRepository
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CashCardRepository for PostgresCashCardRepository {
    async fn find_by_id(&self, id: &CashCardId) -> Result<Option<CashCard>, RepositoryError> {
        let row = sqlx::query_as::<_, CashCardRow>(
            r#"
            SELECT id, amount, owner
            FROM cash_cards
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(CashCard::from))
    }

    async fn find_by_id_and_owner(
        &self,
        id: &CashCardId,
        owner: &str,
    ) -> Result<Option<CashCard>, RepositoryError> {
        let row = sqlx::query_as::<_, CashCardRow>(
            r#"
            SELECT id, amount, owner
            FROM cash_cards
            WHERE id = $1 AND owner = $2
            "#,
        )
        .bind(id.as_i64())
        .bind(owner)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(CashCard::from))
    }

    async fn find_by_owner(
        &self,
        owner: &str,
        page: &PageSpec,
    ) -> Result<Vec<CashCard>, RepositoryError> {
        // Sort column and direction come from closed enums, never from the
        // raw query string, so interpolating them is safe.
        let sort = page.sort();
        let query = format!(
            "SELECT id, amount, owner \
             FROM cash_cards \
             WHERE owner = $1 \
             ORDER BY {} {} \
             LIMIT $2 OFFSET $3",
            sort.field.as_column(),
            sort.direction.as_sql(),
        );

        let rows = sqlx::query_as::<_, CashCardRow>(&query)
            .bind(owner)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(CashCard::from).collect())
    }

    async fn save(&self, card: &CashCard) -> Result<CashCard, RepositoryError> {
        let row = match card.id() {
            None => {
                sqlx::query_as::<_, CashCardRow>(
                    r#"
                    INSERT INTO cash_cards (amount, owner)
                    VALUES ($1, $2)
                    RETURNING id, amount, owner
                    "#,
                )
                .bind(card.amount())
                .bind(card.owner())
                .fetch_one(&self.pool)
                .await?
            }
            Some(id) => sqlx::query_as::<_, CashCardRow>(
                r#"
                UPDATE cash_cards
                SET amount = $2, owner = $3
                WHERE id = $1
                RETURNING id, amount, owner
                "#,
            )
            .bind(id.as_i64())
            .bind(card.amount())
            .bind(card.owner())
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| RepositoryError::NotFound(format!("cash card {id}")))?,
        };

        Ok(CashCard::from(row))
    }

    async fn delete(&self, card: &CashCard) -> Result<bool, RepositoryError> {
        let Some(id) = card.id() else {
            return Ok(false);
        };

        let result = sqlx::query(
            r#"
            DELETE FROM cash_cards
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
