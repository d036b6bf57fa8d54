use super::traits::*;
use super::varint::decode_uvarint;
use crate::domain::error::DomainError;
use bytes::{Buf, Bytes};

#[derive(Debug, Default, Clone)]
pub struct BaseParser;

impl ByteParser for BaseParser {}

impl PrimitiveParser for BaseParser {
    fn parse_i16(&self, buf: &mut Bytes) -> Result<i16, DomainError> {
        self.ensure_remaining(buf, 2)?;
        Ok(buf.get_i16())
    }

    fn parse_i32(&self, buf: &mut Bytes) -> Result<i32, DomainError> {
        self.ensure_remaining(buf, 4)?;
        Ok(buf.get_i32())
    }

    fn parse_u8(&self, buf: &mut Bytes) -> Result<u8, DomainError> {
        self.ensure_remaining(buf, 1)?;
        Ok(buf.get_u8())
    }
}

impl BaseParser {
    /// Reads `len` string bytes after a length prefix has already been
    /// decoded. The declared length is checked against the remaining
    /// buffer before any bytes are taken.
    fn take_string(&self, buf: &mut Bytes, len: usize) -> Result<String, DomainError> {
        if buf.remaining() < len {
            return Err(DomainError::MalformedField(format!(
                "declared string length {} exceeds {} remaining bytes",
                len,
                buf.remaining()
            )));
        }
        let bytes = buf.slice(..len);
        buf.advance(len);

        String::from_utf8(bytes.to_vec())
            .map_err(|e| DomainError::MalformedField(format!("invalid UTF-8 sequence: {}", e)))
    }
}

impl CompactStringParser for BaseParser {
    fn parse_compact_string(&self, buf: &mut Bytes) -> Result<String, DomainError> {
        let len = decode_uvarint(buf)?;
        if len == 0 {
            return Err(DomainError::MalformedField(
                "null sentinel in required string field".to_string(),
            ));
        }
        self.take_string(buf, len as usize - 1)
    }

    fn parse_compact_nullable_string(
        &self,
        buf: &mut Bytes,
    ) -> Result<Option<String>, DomainError> {
        let len = decode_uvarint(buf)?;
        if len == 0 {
            return Ok(None);
        }
        self.take_string(buf, len as usize - 1).map(Some)
    }
}

impl CompactArrayParser for BaseParser {
    fn parse_compact_array<T, F>(&self, buf: &mut Bytes, parse: F) -> Result<Vec<T>, DomainError>
    where
        F: Fn(&mut Bytes) -> Result<T, DomainError>,
    {
        let len = decode_uvarint(buf)?;
        let count = if len > 1 { len as usize - 1 } else { 0 };

        let mut items = Vec::with_capacity(count.min(1024));
        for _ in 0..count {
            items.push(parse(buf)?);
        }

        Ok(items)
    }
}

impl TaggedFieldParser for BaseParser {
    fn parse_tagged_fields(&self, buf: &mut Bytes) -> Result<(), DomainError> {
        let count = decode_uvarint(buf)?;
        if count != 0 {
            return Err(DomainError::UnsupportedTaggedFields(count));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::protocol::parser::varint::PutVarint;

    fn compact_string_bytes(s: &str) -> Bytes {
        let mut data = Vec::new();
        data.put_uvarint(s.len() as u64 + 1);
        data.extend_from_slice(s.as_bytes());
        Bytes::from(data)
    }

    #[test]
    fn test_parse_compact_string() {
        let parser = BaseParser;
        let mut buf = compact_string_bytes("payments");
        assert_eq!(parser.parse_compact_string(&mut buf).unwrap(), "payments");
        assert_eq!(buf.remaining(), 0);
    }

    #[test]
    fn test_empty_string_is_not_null() {
        let parser = BaseParser;
        let mut buf = compact_string_bytes("");
        assert_eq!(parser.parse_compact_string(&mut buf).unwrap(), "");
    }

    #[test]
    fn test_null_sentinel_rejected_for_required_string() {
        let parser = BaseParser;
        let mut buf = Bytes::from_static(&[0x00]);
        assert!(matches!(
            parser.parse_compact_string(&mut buf),
            Err(DomainError::MalformedField(_))
        ));
    }

    #[test]
    fn test_nullable_string_null_vs_empty() {
        let parser = BaseParser;

        let mut null_buf = Bytes::from_static(&[0x00]);
        assert_eq!(parser.parse_compact_nullable_string(&mut null_buf).unwrap(), None);

        let mut empty_buf = Bytes::from_static(&[0x01]);
        assert_eq!(
            parser.parse_compact_nullable_string(&mut empty_buf).unwrap(),
            Some(String::new())
        );
    }

    #[test]
    fn test_declared_length_past_buffer_end() {
        let parser = BaseParser;
        // length 9 declared, only 2 bytes follow
        let mut buf = Bytes::from_static(&[0x0A, b'a', b'b']);
        assert!(matches!(
            parser.parse_compact_string(&mut buf),
            Err(DomainError::MalformedField(_))
        ));
    }

    #[test]
    fn test_parse_compact_array_of_i32() {
        let parser = BaseParser;
        let mut data = Vec::new();
        data.put_uvarint(3); // 2 elements
        data.extend_from_slice(&7i32.to_be_bytes());
        data.extend_from_slice(&(-1i32).to_be_bytes());

        let mut buf = Bytes::from(data);
        let items = parser
            .parse_compact_array(&mut buf, |b| BaseParser.parse_i32(b))
            .unwrap();
        assert_eq!(items, vec![7, -1]);
    }

    #[test]
    fn test_parse_compact_array_empty() {
        let parser = BaseParser;
        let mut buf = Bytes::from_static(&[0x01]);
        let items = parser
            .parse_compact_array(&mut buf, |b| BaseParser.parse_i32(b))
            .unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn test_array_element_truncation_propagates() {
        let parser = BaseParser;
        let mut data = Vec::new();
        data.put_uvarint(2); // 1 element declared
        data.extend_from_slice(&[0x00, 0x01]); // half an i32

        let mut buf = Bytes::from(data);
        assert!(matches!(
            parser.parse_compact_array(&mut buf, |b| BaseParser.parse_i32(b)),
            Err(DomainError::TruncatedInput { .. })
        ));
    }

    #[test]
    fn test_tagged_fields_zero_consumed() {
        let parser = BaseParser;
        let mut buf = Bytes::from_static(&[0x00, 0xAB]);
        parser.parse_tagged_fields(&mut buf).unwrap();
        assert_eq!(buf.remaining(), 1);
    }

    #[test]
    fn test_tagged_fields_nonzero_rejected() {
        let parser = BaseParser;
        let mut buf = Bytes::from_static(&[0x02]);
        assert_eq!(
            parser.parse_tagged_fields(&mut buf),
            Err(DomainError::UnsupportedTaggedFields(2))
        );
    }

    #[test]
    fn test_primitive_truncation() {
        let parser = BaseParser;
        let mut buf = Bytes::from_static(&[0x01]);
        assert_eq!(
            parser.parse_i32(&mut buf),
            Err(DomainError::TruncatedInput { needed: 4, remaining: 1 })
        );
    }
}
