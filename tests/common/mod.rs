//! Common test utilities for e2e tests
//!
//! Provides test infrastructure for spinning up a PostgreSQL container,
//! running migrations, seeding users and cards, and creating a test
//! application.

use std::sync::Arc;

use axum::{middleware, Router};
use base64::{engine::general_purpose, Engine as _};
use rust_decimal::Decimal;
use serde::Deserialize;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use testcontainers::{runners::AsyncRunner, ContainerAsync, ImageExt};
use testcontainers_modules::postgres::Postgres;
use tower_http::trace::TraceLayer;

use cashcard_api::application::use_cases::cash_cards::{
    CreateCashCardUseCase, DeleteCashCardUseCase, GetCashCardByIdUseCase, ListCashCardsUseCase,
    UpdateCashCardUseCase,
};
use cashcard_api::domain::models::user::{password_digest, CARD_OWNER_ROLE};
use cashcard_api::infrastructure::driven_adapters::{
    PostgresCashCardRepository, PostgresUserRepository,
};
use cashcard_api::infrastructure::driving_adapters::api_rest::handlers::cash_cards;
use cashcard_api::infrastructure::driving_adapters::api_rest::middleware::auth::add_user_store_extension;
use cashcard_api::infrastructure::driving_adapters::api_rest::AppState;

/// Test application context
pub struct TestApp {
    pub router: Router,
    pub pool: PgPool,
    _container: ContainerAsync<Postgres>,
}

impl TestApp {
    /// Create a new test application with a fresh PostgreSQL database
    pub async fn new() -> Self {
        // Start PostgreSQL container
        let container = Postgres::default()
            .with_tag("16-alpine")
            .start()
            .await
            .expect("Failed to start PostgreSQL container");

        let host = container.get_host().await.expect("Failed to get host");
        let port = container
            .get_host_port_ipv4(5432)
            .await
            .expect("Failed to get port");

        let database_url = format!("postgres://postgres:postgres@{}:{}/postgres", host, port);

        // Create connection pool
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .min_connections(1)
            .connect(&database_url)
            .await
            .expect("Failed to connect to test database");

        // Run migrations
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("Failed to run migrations");

        // Create repositories
        let cash_card_repository = Arc::new(PostgresCashCardRepository::new(pool.clone()));
        let user_repository = Arc::new(PostgresUserRepository::new(pool.clone()));

        // Create use cases
        let create_cash_card_use_case =
            Arc::new(CreateCashCardUseCase::new(cash_card_repository.clone()));
        let get_cash_card_by_id_use_case =
            Arc::new(GetCashCardByIdUseCase::new(cash_card_repository.clone()));
        let list_cash_cards_use_case =
            Arc::new(ListCashCardsUseCase::new(cash_card_repository.clone()));
        let update_cash_card_use_case =
            Arc::new(UpdateCashCardUseCase::new(cash_card_repository.clone()));
        let delete_cash_card_use_case =
            Arc::new(DeleteCashCardUseCase::new(cash_card_repository.clone()));

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
        let router = Router::new()
            .nest("/cashcards", cash_cards::router())
            .layer(middleware::from_fn_with_state(
                app_state.clone(),
                add_user_store_extension,
            ))
            .layer(TraceLayer::new_for_http())
            .with_state(app_state);

        Self {
            router,
            pool,
            _container: container,
        }
    }

    /// Insert a user into the user/role store
    pub async fn seed_user(&self, username: &str, password: &str, role: &str) {
        sqlx::query("INSERT INTO users (username, password_digest, role) VALUES ($1, $2, $3)")
            .bind(username)
            .bind(password_digest(password))
            .bind(role)
            .execute(&self.pool)
            .await
            .expect("Failed to seed user");
    }

    /// Insert a cash card with an explicit id
    pub async fn seed_card(&self, id: i64, amount: Decimal, owner: &str) {
        sqlx::query("INSERT INTO cash_cards (id, amount, owner) VALUES ($1, $2, $3)")
            .bind(id)
            .bind(amount)
            .bind(owner)
            .execute(&self.pool)
            .await
            .expect("Failed to seed cash card");
    }

    /// Seed the standard fixture: jay's four cards, reed's card 102, and a
    /// user with no recognized role
    pub async fn seed_default_data(&self) {
        self.seed_user("jay", "abc1234", CARD_OWNER_ROLE).await;
        self.seed_user("reed", "abc123", CARD_OWNER_ROLE).await;
        self.seed_user("hank_owns_no_cards", "abcd", "NON-OWNER").await;

        self.seed_card(99, Decimal::new(12345, 2), "jay").await; // 123.45
        self.seed_card(100, Decimal::new(100, 2), "jay").await; // 1.00
        self.seed_card(101, Decimal::new(15000, 2), "jay").await; // 150.00
        self.seed_card(120, Decimal::new(45343, 2), "jay").await; // 453.43
        self.seed_card(102, Decimal::new(20000, 2), "reed").await; // 200.00
    }
}

/// Build a Basic Authorization header value
pub fn basic_auth(username: &str, password: &str) -> String {
    format!(
        "Basic {}",
        general_purpose::STANDARD.encode(format!("{username}:{password}"))
    )
}

/// Cash card response structure for deserialization
#[derive(Debug, Deserialize)]
#[allow(dead_code)]
pub struct CashCardResponse {
    pub id: i64,
    pub amount: f64,
    pub owner: String,
}
