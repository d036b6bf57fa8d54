/// Wire-level failures. All of these are fatal to the connection and
/// never reported to the peer; semantic conditions (unknown topic,
/// unsupported version) are encoded into responses instead.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    TruncatedInput { needed: usize, remaining: usize },
    MalformedField(String),
    UnsupportedTaggedFields(u64),
    UnsupportedCursor(u8),
    ConnectionClosed,
    InvalidFrameSize(i32),
    InvalidTopicId(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::TruncatedInput { needed, remaining } => {
                write!(f, "truncated input: need {} bytes but {} remain", needed, remaining)
            }
            DomainError::MalformedField(msg) => write!(f, "malformed field: {}", msg),
            DomainError::UnsupportedTaggedFields(count) => {
                write!(f, "unsupported tagged fields: count {}", count)
            }
            DomainError::UnsupportedCursor(byte) => {
                write!(f, "unsupported cursor byte: 0x{:02x}", byte)
            }
            DomainError::ConnectionClosed => write!(f, "connection closed mid-frame"),
            DomainError::InvalidFrameSize(size) => write!(f, "invalid frame size: {}", size),
            DomainError::InvalidTopicId(s) => write!(f, "invalid topic id: {}", s),
        }
    }
}

impl std::error::Error for DomainError {}
