use crate::domain::error::DomainError;
use crate::{ApplicationError, Result};
use bytes::{BufMut, Bytes, BytesMut};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

/// Upper bound on a declared frame length. Anything larger is treated
/// as a corrupt prefix rather than a request worth buffering.
pub const MAX_FRAME_SIZE: usize = 16 * 1024 * 1024;

/// Reads one length-prefixed frame and returns the payload without the
/// prefix. `None` means the peer closed cleanly before a new frame
/// started; EOF after the prefix is a protocol failure.
pub async fn read_frame<R>(stream: &mut R) -> Result<Option<Bytes>>
where
    R: AsyncRead + Unpin,
{
    let mut size_bytes = [0u8; 4];
    match stream.read_exact(&mut size_bytes).await {
        Ok(_) => {}
        Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => return Ok(None),
        Err(e) => return Err(ApplicationError::Io(e)),
    }

    let size = i32::from_be_bytes(size_bytes);
    if size <= 0 || size as usize > MAX_FRAME_SIZE {
        return Err(DomainError::InvalidFrameSize(size).into());
    }

    let mut payload = vec![0u8; size as usize];
    match stream.read_exact(&mut payload).await {
        Ok(_) => Ok(Some(payload.into())),
        Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => {
            Err(DomainError::ConnectionClosed.into())
        }
        Err(e) => Err(ApplicationError::Io(e)),
    }
}

/// Writes the 4-byte big-endian length prefix and the payload as one
/// logical write.
pub async fn write_frame<W>(stream: &mut W, payload: &[u8]) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    let mut framed = BytesMut::with_capacity(4 + payload.len());
    framed.put_i32(payload.len() as i32);
    framed.put_slice(payload);
    stream.write_all(&framed).await.map_err(ApplicationError::Io)
}
