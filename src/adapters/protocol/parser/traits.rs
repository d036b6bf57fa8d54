use crate::domain::error::DomainError;
use bytes::{Buf, Bytes};

pub trait ByteParser {
    fn ensure_remaining(&self, buf: &Bytes, needed: usize) -> Result<(), DomainError> {
        if buf.remaining() < needed {
            return Err(DomainError::TruncatedInput {
                needed,
                remaining: buf.remaining(),
            });
        }
        Ok(())
    }
}

pub trait PrimitiveParser: ByteParser {
    fn parse_i16(&self, buf: &mut Bytes) -> Result<i16, DomainError>;
    fn parse_i32(&self, buf: &mut Bytes) -> Result<i32, DomainError>;
    fn parse_u8(&self, buf: &mut Bytes) -> Result<u8, DomainError>;
}

pub trait CompactStringParser: ByteParser {
    /// Required compact string. A declared length of 0 (the null
    /// sentinel) is malformed here; only nullable fields may carry it.
    fn parse_compact_string(&self, buf: &mut Bytes) -> Result<String, DomainError>;
    fn parse_compact_nullable_string(&self, buf: &mut Bytes)
        -> Result<Option<String>, DomainError>;
}

pub trait CompactArrayParser: ByteParser {
    fn parse_compact_array<T, F>(&self, buf: &mut Bytes, parse: F) -> Result<Vec<T>, DomainError>
    where
        F: Fn(&mut Bytes) -> Result<T, DomainError>;
}

pub trait TaggedFieldParser: ByteParser {
    /// Consumes a tagged-field count to keep the cursor aligned. No tag
    /// schema is implemented, so any nonzero count is rejected.
    fn parse_tagged_fields(&self, buf: &mut Bytes) -> Result<(), DomainError>;
}
