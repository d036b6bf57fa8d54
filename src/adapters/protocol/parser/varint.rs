use crate::domain::error::DomainError;
use bytes::{Buf, BufMut, Bytes, BytesMut};

/// Kafka unsigned varint (base-128, low-order group first, 0x80
/// continuation bit on every byte except the last).
pub trait PutVarint {
    fn put_uvarint(&mut self, num: u64);
}

impl PutVarint for Vec<u8> {
    fn put_uvarint(&mut self, mut num: u64) {
        while (num & !0x7F) != 0 {
            self.push(((num & 0x7F) | 0x80) as u8);
            num >>= 7;
        }
        self.push(num as u8);
    }
}

impl PutVarint for BytesMut {
    fn put_uvarint(&mut self, mut num: u64) {
        while (num & !0x7F) != 0 {
            self.put_u8(((num & 0x7F) | 0x80) as u8);
            num >>= 7;
        }
        self.put_u8(num as u8);
    }
}

pub fn decode_uvarint(buf: &mut Bytes) -> Result<u64, DomainError> {
    let mut result: u64 = 0;
    let mut shift: u32 = 0;

    loop {
        if buf.remaining() == 0 {
            return Err(DomainError::TruncatedInput {
                needed: 1,
                remaining: 0,
            });
        }
        if shift > 63 {
            return Err(DomainError::MalformedField(
                "uvarint exceeds 64 bits".to_string(),
            ));
        }

        let byte = buf.get_u8();
        result |= ((byte & 0x7F) as u64) << shift;

        if byte & 0x80 == 0 {
            return Ok(result);
        }
        shift += 7;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(num: u64) -> Vec<u8> {
        let mut buf = Vec::new();
        buf.put_uvarint(num);
        buf
    }

    #[test]
    fn test_round_trip() {
        for num in [0u64, 1, 127, 128, 300, 16383, 16384, 2097151, u32::MAX as u64, u64::MAX] {
            let mut buf = Bytes::from(encode(num));
            assert_eq!(decode_uvarint(&mut buf).unwrap(), num);
            assert_eq!(buf.remaining(), 0);
        }
    }

    #[test]
    fn test_single_byte_boundary() {
        assert_eq!(encode(127), vec![0x7F]);
        assert_eq!(encode(128), vec![0x80, 0x01]);
        assert_eq!(encode(300), vec![0xAC, 0x02]);
    }

    #[test]
    fn test_bytesmut_matches_vec() {
        let mut vec_buf = Vec::new();
        vec_buf.put_uvarint(300);
        let mut bytes_buf = BytesMut::new();
        bytes_buf.put_uvarint(300);
        assert_eq!(&vec_buf[..], &bytes_buf[..]);
    }

    #[test]
    fn test_truncated_fails() {
        let mut buf = Bytes::from_static(&[0xAC]); // continuation bit set, nothing after
        assert!(matches!(
            decode_uvarint(&mut buf),
            Err(DomainError::TruncatedInput { .. })
        ));
    }

    #[test]
    fn test_oversized_fails() {
        let mut buf = Bytes::from(vec![0x80u8; 11]);
        assert!(matches!(
            decode_uvarint(&mut buf),
            Err(DomainError::MalformedField(_))
        ));
    }
}
