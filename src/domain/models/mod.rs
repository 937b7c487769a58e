//! Domain Models
//!
//! Pure domain entities and value objects representing business concepts.

pub mod cash_card;
pub mod page;
pub mod user;

pub use cash_card::{CashCard, CashCardId};
pub use page::{PageSpec, Sort, SortDirection, SortField};
pub use user::User;
