use std::fmt;

use serde::{Deserialize, Serialize};

/// Telegram user identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Single-operator allow list. Set once at startup, read-only afterwards.
#[derive(Debug, Clone, Copy)]
pub struct AccessGate {
    authorized: UserId,
}

impl AccessGate {
    pub fn new(authorized: UserId) -> Self {
        Self { authorized }
    }

    pub fn is_allowed(&self, sender: UserId) -> bool {
        sender == self.authorized
    }
}
