//! Cash Card Repository Adapters

pub mod postgres;

pub use postgres::PostgresCashCardRepository;
