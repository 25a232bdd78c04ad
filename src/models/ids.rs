use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Identifier for a user, as assigned by the ratings dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u32);

impl Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for UserId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// Identifier for a movie, as assigned by the movie catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(pub u32);

impl Display for MovieId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for MovieId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_display() {
        assert_eq!(format!("{}", UserId(42)), "42");
        assert_eq!(format!("{}", MovieId(318)), "318");
    }

    #[test]
    fn test_ids_serde_transparent() {
        let json = serde_json::to_string(&MovieId(318)).unwrap();
        assert_eq!(json, "318");

        let id: UserId = serde_json::from_str("42").unwrap();
        assert_eq!(id, UserId(42));
    }
}
