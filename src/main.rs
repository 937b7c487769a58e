//! Cash Card API - Main Entry Point

use std::sync::Arc;

use axum::{middleware, Router};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cashcard_api::application::use_cases::cash_cards::{
    CreateCashCardUseCase, DeleteCashCardUseCase, GetCashCardByIdUseCase, ListCashCardsUseCase,
    UpdateCashCardUseCase,
};
use cashcard_api::infrastructure::driven_adapters::config::AppConfig;
use cashcard_api::infrastructure::driven_adapters::database;
use cashcard_api::infrastructure::driven_adapters::{
    PostgresCashCardRepository, PostgresUserRepository,
};
use cashcard_api::infrastructure::driving_adapters::api_rest::handlers::cash_cards;
use cashcard_api::infrastructure::driving_adapters::api_rest::middleware::auth::add_user_store_extension;
use cashcard_api::infrastructure::driving_adapters::api_rest::middleware::request_id::request_id_middleware;
use cashcard_api::infrastructure::driving_adapters::api_rest::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cashcard_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load()?;
    tracing::info!("Configuration loaded successfully");

    // Create database connection pool
    let pool = database::create_pool(&config.database).await?;
    tracing::info!("Database connection pool created");

    // Run migrations
    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Database migrations completed");

    // Create repositories
    let cash_card_repository = Arc::new(PostgresCashCardRepository::new(pool.clone()));
    let user_repository = Arc::new(PostgresUserRepository::new(pool));

    // Create use cases
    let create_cash_card_use_case = Arc::new(CreateCashCardUseCase::new(cash_card_repository.clone()));
    let get_cash_card_by_id_use_case = Arc::new(GetCashCardByIdUseCase::new(cash_card_repository.clone()));
    let list_cash_cards_use_case = Arc::new(ListCashCardsUseCase::new(cash_card_repository.clone()));
    let update_cash_card_use_case = Arc::new(UpdateCashCardUseCase::new(cash_card_repository.clone()));
    let delete_cash_card_use_case = Arc::new(DeleteCashCardUseCase::new(cash_card_repository.clone()));

    // Create application state
    let app_state = AppState {
        user_repository,
        create_cash_card_use_case,
        get_cash_card_by_id_use_case,
        list_cash_cards_use_case,
        update_cash_card_use_case,
        delete_cash_card_use_case,
    };

    // Build router
    let app = Router::new()
        .nest("/cashcards", cash_cards::router())
        .layer(middleware::from_fn_with_state(
            app_state.clone(),
            add_user_store_extension,
        ))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(app_state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
