//! Cash Card DTOs
//!
//! Data transfer objects for cash card API endpoints. Amounts cross the JSON
//! boundary as plain numbers and live as `Decimal` in the domain.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::models::cash_card::{CashCard, CashCardId};
use crate::domain::models::page::{
    PageSpec, Sort, SortDirection, SortField, DEFAULT_PAGE, DEFAULT_SIZE,
};
use crate::shared::errors::ApiError;

/// Validates that an f64 can be safely converted to Decimal
fn validate_amount(value: f64) -> Result<(), validator::ValidationError> {
    if !value.is_finite() {
        let mut error = validator::ValidationError::new("amount");
        error.message = Some("amount must be a finite number".into());
        return Err(error);
    }
    if Decimal::try_from(value).is_err() {
        let mut error = validator::ValidationError::new("amount");
        error.message = Some("amount cannot be represented as a decimal".into());
        return Err(error);
    }
    Ok(())
}

/// Safely converts f64 to Decimal
/// This should only be called after validate() has succeeded
fn f64_to_decimal(value: f64) -> Decimal {
    Decimal::try_from(value).expect("amount should have been validated")
}

/// DTO for creating a cash card
///
/// Only the amount is read from the body; any id or owner fields a caller
/// sends are ignored, since the store assigns the id and the owner is the
/// authenticated principal.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCashCardDto {
    #[validate(custom(function = "validate_amount"))]
    pub amount: f64,
}

impl CreateCashCardDto {
    #[must_use]
    pub fn amount_as_decimal(&self) -> Decimal {
        f64_to_decimal(self.amount)
    }
}

/// DTO for replacing a cash card's amount (PUT)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateCashCardDto {
    #[validate(custom(function = "validate_amount"))]
    pub amount: f64,
}

impl UpdateCashCardDto {
    #[must_use]
    pub fn amount_as_decimal(&self) -> Decimal {
        f64_to_decimal(self.amount)
    }
}

/// Cash card response DTO
#[derive(Debug, Clone, Serialize)]
pub struct CashCardResponseDto {
    pub id: Option<i64>,
    pub amount: f64,
    pub owner: String,
}

impl From<CashCard> for CashCardResponseDto {
    fn from(card: CashCard) -> Self {
        Self {
            id: card.id().map(CashCardId::as_i64),
            amount: card.amount().try_into().unwrap_or(0.0),
            owner: card.owner().to_string(),
        }
    }
}

/// Query parameters for the list endpoint
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ListCashCardsParams {
    pub page: Option<u32>,

    #[validate(range(min = 1, message = "size must be at least 1"))]
    pub size: Option<u32>,

    /// Sort order as `field` or `field,direction`, e.g. `amount,desc`
    pub sort: Option<String>,
}

impl ListCashCardsParams {
    /// Resolve the caller-supplied parameters into a page spec, applying
    /// defaults for anything absent
    pub fn into_page_spec(self) -> Result<PageSpec, ApiError> {
        let sort = match self.sort.as_deref() {
            None | Some("") => Sort::default(),
            Some(raw) => parse_sort(raw)?,
        };

        Ok(PageSpec::new(
            self.page.unwrap_or(DEFAULT_PAGE),
            self.size.unwrap_or(DEFAULT_SIZE),
            sort,
        ))
    }
}

/// Parse a `field[,direction]` sort expression
fn parse_sort(raw: &str) -> Result<Sort, ApiError> {
    let (field_raw, direction_raw) = match raw.split_once(',') {
        Some((field, direction)) => (field, Some(direction)),
        None => (raw, None),
    };

    let field = SortField::parse(field_raw)
        .ok_or_else(|| ApiError::BadRequest(format!("Unknown sort field '{field_raw}'")))?;

    let direction = match direction_raw {
        None => SortDirection::Ascending,
        Some(raw) => SortDirection::parse(raw)
            .ok_or_else(|| ApiError::BadRequest(format!("Unknown sort direction '{raw}'")))?,
    };

    Ok(Sort::new(field, direction))
}
