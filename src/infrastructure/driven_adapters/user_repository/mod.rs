//! User Repository Adapters

pub mod postgres;

pub use postgres::PostgresUserRepository;
