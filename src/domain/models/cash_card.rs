//! Cash Card Domain Model
//!
//! Represents a monetary record owned by an authenticated user.

use rust_decimal::Decimal;

/// Newtype wrapper for Cash Card ID providing type safety
///
/// Ids are sequential and assigned by the store on insert, so unlike a UUID
/// there is no way to mint one client-side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CashCardId(i64);

impl CashCardId {
    /// Create a CashCardId from a raw store-assigned id
    #[must_use]
    pub fn from_i64(id: i64) -> Self {
        Self(id)
    }

    /// Get the underlying id
    #[must_use]
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for CashCardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for CashCardId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// Cash card domain entity
///
/// The id is absent until the store assigns one on insert. The owner is
/// always the principal that created the card and never changes afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct CashCard {
    id: Option<CashCardId>,
    amount: Decimal,
    owner: String,
}

impl CashCard {
    /// Create a new, not-yet-persisted cash card for the given owner
    #[must_use]
    pub fn new(amount: Decimal, owner: String) -> Self {
        Self {
            id: None,
            amount,
            owner,
        }
    }

    /// Restore a cash card from persisted data
    #[must_use]
    pub fn restore(id: CashCardId, amount: Decimal, owner: String) -> Self {
        Self {
            id: Some(id),
            amount,
            owner,
        }
    }

    /// Return a copy with the amount replaced, keeping id and owner
    #[must_use]
    pub fn with_amount(self, amount: Decimal) -> Self {
        Self { amount, ..self }
    }

    // Getters

    #[must_use]
    pub fn id(&self) -> Option<&CashCardId> {
        self.id.as_ref()
    }

    #[must_use]
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }
}
