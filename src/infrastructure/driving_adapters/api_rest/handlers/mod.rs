//! REST API Handlers

pub mod cash_cards;
