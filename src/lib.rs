//! Cash Card API
//!
//! A Rust-based microservice for managing cash cards with per-owner access
//! control, following Clean/Hexagonal Architecture principles.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;
