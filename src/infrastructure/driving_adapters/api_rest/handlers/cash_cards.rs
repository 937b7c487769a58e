//! Cash Card Handlers
//!
//! HTTP handlers for the owner-scoped cash card CRUD operations.
//! All endpoints require HTTP Basic authentication and the CARD-OWNER role.

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{delete, get, post, put},
    Json, Router,
};
use validator::Validate;

use crate::domain::models::cash_card::CashCardId;
use crate::infrastructure::driving_adapters::api_rest::dto::cash_card::{
    CashCardResponseDto, CreateCashCardDto, ListCashCardsParams, UpdateCashCardDto,
};
use crate::infrastructure::driving_adapters::api_rest::middleware::auth::CardOwner;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Create the router for cash card endpoints
///
/// All routes authenticate through the `CardOwner` extractor. The
/// `add_user_store_extension` middleware injects the user store into request
/// extensions.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_cash_card))
        .route("/", get(list_cash_cards))
        .route("/:id", get(get_cash_card_by_id))
        .route("/:id", put(update_cash_card))
        .route("/:id", delete(delete_cash_card))
}

/// POST /cashcards - Create a new cash card
///
/// The owner is the authenticated principal; the body only carries the amount.
///
/// # Responses
///
/// * 201 Created - empty body, `Location` header points at the new card
/// * 400 Bad Request - amount not representable
/// * 401 Unauthorized - missing or invalid credentials
/// * 403 Forbidden - principal lacks the CARD-OWNER role
#[axum::debug_handler]
async fn create_cash_card(
    CardOwner(principal): CardOwner,
    State(state): State<AppState>,
    Json(dto): Json<CreateCashCardDto>,
) -> Result<impl IntoResponse, ApiError> {
    // Validate DTO
    dto.validate()?;

    // Execute use case
    let card = state
        .create_cash_card_use_case
        .execute(dto.amount_as_decimal(), &principal.name)
        .await?;

    let Some(id) = card.id() else {
        return Err(ApiError::Internal(anyhow::anyhow!(
            "store did not assign an id on insert"
        )));
    };

    // Return response
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/cashcards/{id}"))],
    ))
}

/// GET /cashcards - List the principal's cash cards
///
/// Supports `page`, `size`, and `sort=field,direction` query parameters;
/// the default order is ascending amount. Only cards owned by the principal
/// are ever returned.
///
/// # Responses
///
/// * 200 OK - JSON array with the requested page
/// * 400 Bad Request - unusable paging or sort parameters
/// * 401 Unauthorized - missing or invalid credentials
/// * 403 Forbidden - principal lacks the CARD-OWNER role
#[axum::debug_handler]
async fn list_cash_cards(
    CardOwner(principal): CardOwner,
    State(state): State<AppState>,
    Query(params): Query<ListCashCardsParams>,
) -> Result<Json<Vec<CashCardResponseDto>>, ApiError> {
    // Validate query parameters
    params.validate()?;
    let page = params.into_page_spec()?;

    // Execute use case
    let cards = state
        .list_cash_cards_use_case
        .execute(&principal.name, &page)
        .await?;

    // Return response
    let response: Vec<CashCardResponseDto> =
        cards.into_iter().map(CashCardResponseDto::from).collect();
    Ok(Json(response))
}

/// GET /cashcards/:id - Get one of the principal's cash cards
///
/// # Responses
///
/// * 200 OK - card found
/// * 401 Unauthorized - missing or invalid credentials
/// * 403 Forbidden - principal lacks the CARD-OWNER role
/// * 404 Not Found - no card with this id belongs to the principal
#[axum::debug_handler]
async fn get_cash_card_by_id(
    CardOwner(principal): CardOwner,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<CashCardResponseDto>, ApiError> {
    let cash_card_id = CashCardId::from_i64(id);

    // Execute use case
    let card = state
        .get_cash_card_by_id_use_case
        .execute(&cash_card_id, &principal.name)
        .await?;

    // Return response
    Ok(Json(CashCardResponseDto::from(card)))
}

/// PUT /cashcards/:id - Replace the amount of one of the principal's cards
///
/// Id and owner are immutable; only the amount changes.
///
/// # Responses
///
/// * 204 No Content - card updated
/// * 400 Bad Request - amount not representable
/// * 401 Unauthorized - missing or invalid credentials
/// * 403 Forbidden - principal lacks the CARD-OWNER role
/// * 404 Not Found - no card with this id belongs to the principal
#[axum::debug_handler]
async fn update_cash_card(
    CardOwner(principal): CardOwner,
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(dto): Json<UpdateCashCardDto>,
) -> Result<StatusCode, ApiError> {
    // Validate DTO
    dto.validate()?;

    let cash_card_id = CashCardId::from_i64(id);

    // Execute use case
    state
        .update_cash_card_use_case
        .execute(&cash_card_id, &principal.name, dto.amount_as_decimal())
        .await?;

    // Return response
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /cashcards/:id - Delete one of the principal's cash cards
///
/// # Responses
///
/// * 204 No Content - card deleted
/// * 401 Unauthorized - missing or invalid credentials
/// * 403 Forbidden - principal lacks the CARD-OWNER role
/// * 404 Not Found - no card with this id belongs to the principal
#[axum::debug_handler]
async fn delete_cash_card(
    CardOwner(principal): CardOwner,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let cash_card_id = CashCardId::from_i64(id);

    // Execute use case
    state
        .delete_cash_card_use_case
        .execute(&cash_card_id, &principal.name)
        .await?;

    // Return response
    Ok(StatusCode::NO_CONTENT)
}
