use crate::domain::error::DomainError;
use std::str::FromStr;
use uuid::Uuid;

/// 16-byte topic identifier. The zero id marks a topic the broker does
/// not know about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TopicId(Uuid);

impl TopicId {
    pub fn new(id: Uuid) -> Self {
        Self(id)
    }

    pub fn zero() -> Self {
        Self(Uuid::nil())
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_nil()
    }

    pub fn as_bytes(&self) -> &[u8; 16] {
        self.0.as_bytes()
    }
}

impl FromStr for TopicId {
    type Err = DomainError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Uuid::parse_str(s.trim())
            .map(Self)
            .map_err(|_| DomainError::InvalidTopicId(s.to_string()))
    }
}

impl From<[u8; 16]> for TopicId {
    fn from(id: [u8; 16]) -> Self {
        Self(Uuid::from_bytes(id))
    }
}

impl std::fmt::Display for TopicId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
